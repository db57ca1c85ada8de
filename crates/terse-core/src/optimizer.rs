//! The prompt shortening pipeline
//!
//! A fixed sequence of textual substitutions. Order matters: normalization
//! at the end cleans up whitespace and comma artifacts the removal stages
//! leave behind.

use tracing::debug;

use crate::config::Config;
use crate::latency::Delay;
use crate::rules;
use crate::tokens::count_tokens;
use crate::types::{Optimization, Options};

/// Shorten `text` according to `opts`.
///
/// Deterministic and total: input with no rule matches comes back unchanged
/// apart from whitespace/comma normalization. Repeated application never
/// grows the token count, though it is not an exact fixed point: removing
/// one phrase can leave another standalone for the next pass.
pub fn optimize(text: &str, opts: &Options) -> String {
    let mut out = text.to_string();

    if !opts.preserve_politeness {
        out = rules::politeness().replace_all(&out, "").into_owned();
    }

    for filler in rules::fillers() {
        out = filler.replace_all(&out, "").into_owned();
    }

    out = rules::exclamations().replace_all(&out, "").into_owned();

    if opts.aggressiveness.shortens_phrases() {
        for (phrase, short) in rules::shortenings() {
            out = phrase.replace_all(&out, *short).into_owned();
        }
    }

    out = rules::comma_spacing().replace_all(&out, ", ").into_owned();
    out = rules::comma_runs().replace_all(&out, ",").into_owned();
    out = rules::whitespace().replace_all(&out, " ").into_owned();

    out.trim_matches(|c: char| c == ' ' || c == ',').to_string()
}

/// Run one optimization request end to end.
///
/// Applies the simulated latency via `delay` (tests pass a zero-delay
/// strategy), then measures the token delta and prices it with the
/// configured cost constant. Persisting the savings is the caller's job.
pub fn process(text: &str, opts: &Options, config: &Config, delay: &dyn Delay) -> Optimization {
    let original_tokens = count_tokens(text);
    let latency = delay.pause();
    let optimized_text = optimize(text, opts);
    let optimized_tokens = count_tokens(&optimized_text);
    let tokens_saved = original_tokens as i64 - optimized_tokens as i64;
    let cost_saved = tokens_saved as f64 * config.cost_per_token;

    debug!(
        original_tokens,
        optimized_tokens, tokens_saved, "optimized prompt"
    );

    Optimization {
        original_tokens,
        optimized_text,
        optimized_tokens,
        tokens_saved,
        cost_saved,
        latency_seconds: latency.as_secs_f64(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::latency::NoDelay;
    use crate::types::Aggressiveness;

    fn opts(preserve_politeness: bool, aggressiveness: Aggressiveness) -> Options {
        Options {
            preserve_politeness,
            aggressiveness,
        }
    }

    #[test]
    fn test_politeness_stripped_when_not_preserved() {
        let out = optimize(
            "Please send this! Thank you.",
            &opts(false, Aggressiveness::Gentle),
        );
        let lower = out.to_lowercase();
        assert!(!lower.contains("please"));
        assert!(!lower.contains("thank"));
        assert!(!out.contains('!'));
        assert!(out.contains("send this"));
    }

    #[test]
    fn test_politeness_kept_when_preserved() {
        let out = optimize("Please send this.", &opts(true, Aggressiveness::Gentle));
        assert!(out.contains("Please"));
    }

    #[test]
    fn test_fillers_removed_regardless_of_politeness_flag() {
        let out = optimize(
            "Hello assistant, I hope you’re doing well. Summarize this.",
            &opts(true, Aggressiveness::Gentle),
        );
        let lower = out.to_lowercase();
        assert!(!lower.contains("hello"));
        assert!(!lower.contains("assistant"));
        assert!(!lower.contains("doing well"));
        assert!(out.contains("Summarize this."));
    }

    #[test]
    fn test_phrase_shortening_at_medium() {
        let out = optimize(
            "I would like to do this in order to save time.",
            &opts(true, Aggressiveness::Medium),
        );
        assert!(out.contains("do this to save time."), "got: {out}");
    }

    #[test]
    fn test_gentle_skips_phrase_shortening() {
        let out = optimize(
            "We met in order to plan.",
            &opts(true, Aggressiveness::Gentle),
        );
        assert!(out.contains("in order to"));
    }

    #[test]
    fn test_medium_and_aggressive_are_identical() {
        let text = "Thanks so much for your help! Due to the fact that we are late, \
                    proceed at this point in time, with regard to the schedule.";
        let medium = optimize(text, &opts(false, Aggressiveness::Medium));
        let aggressive = optimize(text, &opts(false, Aggressiveness::Aggressive));
        assert_eq!(medium, aggressive);
        assert!(medium.contains("because"));
        assert!(medium.contains("now"));
        assert!(medium.contains("about"));
    }

    #[test]
    fn test_comma_and_whitespace_normalization() {
        let out = optimize("one ,  two ,, three", &opts(true, Aggressiveness::Gentle));
        assert_eq!(out, "one, two, three");
        let out = optimize("a,b", &opts(true, Aggressiveness::Gentle));
        assert_eq!(out, "a, b");
    }

    #[test]
    fn test_trim_strips_leading_and_trailing_commas() {
        let out = optimize(
            "Please, fix this, thanks,",
            &opts(false, Aggressiveness::Gentle),
        );
        assert!(!out.starts_with(|c: char| c == ',' || c == ' '));
        assert!(!out.ends_with(|c: char| c == ',' || c == ' '));
    }

    #[test]
    fn test_no_match_input_passes_through() {
        let out = optimize("rewrite the parser", &opts(true, Aggressiveness::Medium));
        assert_eq!(out, "rewrite the parser");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(optimize("", &opts(false, Aggressiveness::Medium)), "");
    }

    #[test]
    fn test_output_never_has_exclamations_or_doubled_commas() {
        let samples = [
            "Wow!!! This,, is ,, great !!",
            "no punctuation here",
            "!,!,!,!",
            "Please!! kindly,, thank you!!",
        ];
        for sample in samples {
            let out = optimize(sample, &opts(true, Aggressiveness::Gentle));
            assert!(!out.contains('!'), "exclamation survived in: {out}");
            assert!(!out.contains(",,"), "doubled comma survived in: {out}");
        }
    }

    #[test]
    fn test_second_pass_never_grows_token_count() {
        let samples = [
            "Hello assistant, please summarize this in order to save time! Thanks so much for your help.",
            "I’d be very grateful if you could review this, due to the fact that it is urgent!!",
            "plain text with nothing to trim",
        ];
        for preserve in [true, false] {
            for aggressiveness in [
                Aggressiveness::Gentle,
                Aggressiveness::Medium,
                Aggressiveness::Aggressive,
            ] {
                let o = opts(preserve, aggressiveness);
                for sample in samples {
                    let once = optimize(sample, &o);
                    let twice = optimize(&once, &o);
                    assert!(
                        count_tokens(&twice) <= count_tokens(&once),
                        "second pass grew {sample:?} under {aggressiveness:?}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_process_measures_savings_exactly() {
        let config = Config::new();
        let result = process(
            "Please summarize this report! Thank you.",
            &opts(false, Aggressiveness::Medium),
            &config,
            &NoDelay,
        );
        assert_eq!(
            result.tokens_saved,
            result.original_tokens as i64 - result.optimized_tokens as i64
        );
        assert_eq!(
            result.cost_saved,
            result.tokens_saved as f64 * config.cost_per_token
        );
        assert_eq!(result.latency_seconds, 0.0);
    }

    #[test]
    fn test_process_savings_can_be_negative() {
        // Comma normalization splits "a,b" into two tokens, so the delta
        // goes below zero. No floor is applied.
        let config = Config::new();
        let result = process("a,b", &opts(true, Aggressiveness::Gentle), &config, &NoDelay);
        assert_eq!(result.optimized_text, "a, b");
        assert_eq!(result.tokens_saved, -1);
        assert!(result.cost_saved < 0.0);
    }
}
