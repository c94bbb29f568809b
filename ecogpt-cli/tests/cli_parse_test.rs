//! Integration tests for [`ecogpt_cli::Cli`] argument parsing.

use clap::Parser;
use ecogpt_cli::{Cli, Commands};
use footprint::{GridIntensityProfile, ModelProfile};

/// **Test: estimate accepts text, model aliases, intensity, and --json.**
#[test]
fn parse_estimate_with_overrides() {
    let cli = Cli::try_parse_from([
        "ecogpt",
        "estimate",
        "hello there",
        "--model",
        "gpt-4o-mini",
        "-i",
        "conservative",
        "--json",
    ])
    .unwrap();

    match cli.command {
        Commands::Estimate {
            text,
            model,
            intensity,
            json,
        } => {
            assert_eq!(text.as_deref(), Some("hello there"));
            assert_eq!(model, Some(ModelProfile::Gpt4oMini));
            assert_eq!(intensity, Some(GridIntensityProfile::Conservative));
            assert!(json);
        }
        _ => panic!("expected estimate"),
    }
}

/// **Test: estimate without TEXT leaves it to stdin and keeps env selection.**
#[test]
fn parse_estimate_defaults() {
    let cli = Cli::try_parse_from(["ecogpt", "estimate"]).unwrap();
    match cli.command {
        Commands::Estimate {
            text,
            model,
            intensity,
            json,
        } => {
            assert!(text.is_none());
            assert!(model.is_none());
            assert!(intensity.is_none());
            assert!(!json);
        }
        _ => panic!("expected estimate"),
    }
}

/// **Test: unknown model names are rejected by the parser.**
#[test]
fn parse_rejects_unknown_model() {
    assert!(Cli::try_parse_from(["ecogpt", "estimate", "x", "--model", "gpt-5"]).is_err());
    assert!(Cli::try_parse_from(["ecogpt", "watch", "--intensity", "coal"]).is_err());
}

/// **Test: watch flags.**
#[test]
fn parse_watch() {
    let cli = Cli::try_parse_from(["ecogpt", "watch", "--no-focus", "-m", "gpt3"]).unwrap();
    match cli.command {
        Commands::Watch {
            model,
            intensity,
            no_focus,
        } => {
            assert_eq!(model, Some(ModelProfile::Gpt3));
            assert!(intensity.is_none());
            assert!(no_focus);
        }
        _ => panic!("expected watch"),
    }
}

/// **Test: remaining subcommands parse.**
#[test]
fn parse_other_commands() {
    assert!(matches!(
        Cli::try_parse_from(["ecogpt", "models"]).unwrap().command,
        Commands::Models
    ));
    assert!(matches!(
        Cli::try_parse_from(["ecogpt", "explain"]).unwrap().command,
        Commands::Explain
    ));
    match Cli::try_parse_from(["ecogpt", "tokens", "the cat"]).unwrap().command {
        Commands::Tokens { text } => assert_eq!(text.as_deref(), Some("the cat")),
        _ => panic!("expected tokens"),
    }
}
