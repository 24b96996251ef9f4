//! Effects module - the per-item effect table
//!
//! Every item resolves to an [`EffectOutcome`]: a declarative record of what
//! the hit does to score, combo multipliers, combo lifecycle, the snake, and
//! health. The session applies outcomes in a fixed order (score change, then
//! multiplier changes, then the combo transition), so an effect that both
//! adjusts a multiplier and ends the combo pays out with the adjusted value.
//!
//! Each edible item branches on whether a combo is active when it is eaten:
//! out of combo it moves the score directly; in combo it moves the x or y
//! multiplier instead, deferring the value to the combo payout.
//!
//! | Kind      | Out of combo                        | In combo               |
//! |-----------|-------------------------------------|------------------------|
//! | FreshEgg  | S += 2                              | y += 2                 |
//! | RipeEgg   | S += 3                              | y *= 1.5               |
//! | ShinyEgg  | S += 5                              | y *= 2                 |
//! | AlienEgg  | S += 8                              | y *= 5                 |
//! | DiscoEgg  | S += 13                             | y *= sqrt(abs(S))      |
//! | RottenEgg | S -= max(10, 10% of S)              | x -= max(10, 25% of S), end |
//! | LavaEgg   | S -= max(75, 75% of S)              | y *= 0.25, end         |
//! | IceEgg    | S = min(S - 10000, sqrt(abs(S)))    | cancel                 |
//! | Mushroom  | S = abs(S)^1.05, start              | x *= 1.25              |
//! | Frog      | S = abs(S)^1.15, start              | y *= 3                 |
//! | Pill      | S = abs(S)^1.5, start               | x *= 8, y *= 8         |
//! | DewDrop   | S = abs(S)                          | x, y = abs(x), abs(y), end |
//! | Skull     | cancel, then one of four score jolts (both branches)         |
//!
//! The power-law scorers fold negative scores specially (see the per-arm
//! expressions) so they punish rather than reward a deficit.

use crate::core::rng::SimpleRng;
use crate::types::{EffectNotice, ItemKind};

/// What an effect does to the raw score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScoreChange {
    None,
    Add(f64),
    Set(f64),
}

/// What an effect does to one combo multiplier.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ComboChange {
    None,
    Add(f64),
    Set(f64),
}

/// Combo lifecycle transition requested by an effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComboTransition {
    None,
    /// Arm a combo (no-op when one is already active).
    Start,
    /// Close the combo with its payout.
    End,
    /// Discard the combo without payout.
    Cancel,
}

/// Declarative result of hitting one item.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EffectOutcome {
    pub score: ScoreChange,
    pub combo_x: ComboChange,
    pub combo_y: ComboChange,
    pub transition: ComboTransition,
    pub grows_snake: bool,
    pub deducts_health: bool,
    pub reverses_controls: Option<bool>,
    pub notice: Option<EffectNotice>,
}

impl EffectOutcome {
    const NEUTRAL: Self = Self {
        score: ScoreChange::None,
        combo_x: ComboChange::None,
        combo_y: ComboChange::None,
        transition: ComboTransition::None,
        grows_snake: false,
        deducts_health: false,
        reverses_controls: None,
        notice: None,
    };
}

/// Resolve the effect of hitting `kind` against the current score and combo
/// state.
///
/// `score`, `combo_x` and `combo_y` are read-only inputs here; multiplicative
/// results come back as [`ScoreChange::Set`]/[`ComboChange::Set`] values the
/// caller applies. Only the Skull draws from the RNG.
pub fn apply(
    kind: ItemKind,
    in_combo: bool,
    score: f64,
    combo_x: f64,
    combo_y: f64,
    rng: &mut SimpleRng,
) -> EffectOutcome {
    let mut out = EffectOutcome::NEUTRAL;

    match kind {
        ItemKind::Wall | ItemKind::LargeWall => {
            out.deducts_health = true;
        }

        ItemKind::FreshEgg => {
            out.grows_snake = true;
            out.notice = Some(EffectNotice::SpecialEgg { in_combo });
            if in_combo {
                out.combo_y = ComboChange::Add(2.0);
            } else {
                out.score = ScoreChange::Add(2.0);
            }
        }
        ItemKind::RipeEgg => {
            out.grows_snake = true;
            out.notice = Some(EffectNotice::SpecialEgg { in_combo });
            if in_combo {
                out.combo_y = ComboChange::Set(combo_y * 1.5);
            } else {
                out.score = ScoreChange::Add(3.0);
            }
        }
        ItemKind::ShinyEgg => {
            out.grows_snake = true;
            out.notice = Some(EffectNotice::SpecialEgg { in_combo });
            if in_combo {
                out.combo_y = ComboChange::Set(combo_y * 2.0);
            } else {
                out.score = ScoreChange::Add(5.0);
            }
        }
        ItemKind::AlienEgg => {
            out.grows_snake = true;
            out.notice = Some(EffectNotice::SpecialEgg { in_combo });
            if in_combo {
                out.combo_y = ComboChange::Set(combo_y * 5.0);
            } else {
                out.score = ScoreChange::Add(8.0);
            }
        }
        ItemKind::DiscoEgg => {
            out.grows_snake = true;
            out.notice = Some(EffectNotice::SpecialEgg { in_combo });
            if in_combo {
                out.combo_y = ComboChange::Set(combo_y * score.abs().sqrt());
            } else {
                out.score = ScoreChange::Add(13.0);
            }
        }

        ItemKind::RottenEgg => {
            out.grows_snake = true;
            out.notice = Some(EffectNotice::BadFood);
            out.reverses_controls = Some(true);
            if in_combo {
                out.combo_x = ComboChange::Add(-(10.0_f64.max(score * 0.25)));
                out.transition = ComboTransition::End;
            } else {
                out.score = ScoreChange::Add(-(10.0_f64.max(score * 0.10)));
            }
        }
        ItemKind::LavaEgg => {
            out.grows_snake = true;
            out.notice = Some(EffectNotice::BadFood);
            if in_combo {
                out.combo_y = ComboChange::Set(combo_y * 0.25);
                out.transition = ComboTransition::End;
            } else {
                out.score = ScoreChange::Add(-(75.0_f64.max(score * 0.75)));
            }
        }
        ItemKind::IceEgg => {
            out.grows_snake = true;
            out.notice = Some(EffectNotice::BadFood);
            if in_combo {
                out.transition = ComboTransition::Cancel;
            } else {
                out.score = ScoreChange::Set((score - 10_000.0).min(score.abs().sqrt()));
            }
        }

        ItemKind::Mushroom => {
            out.notice = Some(EffectNotice::HighChime);
            if in_combo {
                out.combo_x = ComboChange::Set(combo_x * 1.25);
            } else {
                let folded = if score < 0.0 { -1.0 } else { score.abs().powf(1.05) };
                out.score = ScoreChange::Set(folded);
                out.transition = ComboTransition::Start;
            }
        }
        ItemKind::Frog => {
            out.notice = Some(EffectNotice::HighChime);
            if in_combo {
                out.combo_y = ComboChange::Set(combo_y * 3.0);
            } else {
                let powered = score.abs().powf(1.15);
                let folded = if score < 0.0 {
                    score.abs() - powered
                } else {
                    powered
                };
                out.score = ScoreChange::Set(folded);
                out.transition = ComboTransition::Start;
            }
        }
        ItemKind::Pill => {
            out.notice = Some(EffectNotice::HighChime);
            if in_combo {
                out.combo_x = ComboChange::Set(combo_x * 8.0);
                out.combo_y = ComboChange::Set(combo_y * 8.0);
            } else {
                let powered = score.abs().powf(1.5);
                let folded = if score < 0.0 { -powered } else { powered };
                out.score = ScoreChange::Set(folded);
                out.transition = ComboTransition::Start;
            }
        }

        ItemKind::DewDrop => {
            out.reverses_controls = Some(false);
            if in_combo {
                out.combo_x = ComboChange::Set(combo_x.abs());
                out.combo_y = ComboChange::Set(combo_y.abs());
                out.transition = ComboTransition::End;
            } else {
                out.score = ScoreChange::Set(score.abs());
            }
        }

        ItemKind::Skull => {
            out.transition = ComboTransition::Cancel;
            out.score = skull_jolt(score, rng);
        }
    }

    out
}

/// One of four equally likely score jolts, selected by drawing odd values
/// from [-1, 7).
fn skull_jolt(score: f64, rng: &mut SimpleRng) -> ScoreChange {
    let draw = loop {
        let v = rng.next_between(-1, 7);
        if v % 2 != 0 {
            break v;
        }
    };
    match draw {
        -1 => ScoreChange::Set(-9_999.0),
        1 => ScoreChange::Set(score + 9_999.0),
        3 => ScoreChange::Set(0.0),
        _ => ScoreChange::Set(score - 9_999.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolve(kind: ItemKind, in_combo: bool, score: f64, cx: f64, cy: f64) -> EffectOutcome {
        let mut rng = SimpleRng::new(1);
        apply(kind, in_combo, score, cx, cy, &mut rng)
    }

    #[test]
    fn obstacles_only_deduct_health() {
        for kind in [ItemKind::Wall, ItemKind::LargeWall] {
            let out = resolve(kind, false, 50.0, 0.0, 0.0);
            assert!(out.deducts_health);
            assert!(!out.grows_snake);
            assert_eq!(out.score, ScoreChange::None);
            assert_eq!(out.transition, ComboTransition::None);
        }
    }

    #[test]
    fn good_eggs_score_flat_out_of_combo() {
        let cases = [
            (ItemKind::FreshEgg, 2.0),
            (ItemKind::RipeEgg, 3.0),
            (ItemKind::ShinyEgg, 5.0),
            (ItemKind::AlienEgg, 8.0),
            (ItemKind::DiscoEgg, 13.0),
        ];
        for (kind, delta) in cases {
            let out = resolve(kind, false, 0.0, 0.0, 0.0);
            assert_eq!(out.score, ScoreChange::Add(delta));
            assert!(out.grows_snake);
            assert_eq!(
                out.notice,
                Some(EffectNotice::SpecialEgg { in_combo: false })
            );
        }
    }

    #[test]
    fn good_eggs_feed_the_y_multiplier_in_combo() {
        let out = resolve(ItemKind::FreshEgg, true, 0.0, 3.0, 4.0);
        assert_eq!(out.combo_y, ComboChange::Add(2.0));

        let out = resolve(ItemKind::ShinyEgg, true, 0.0, 3.0, 4.0);
        assert_eq!(out.combo_y, ComboChange::Set(8.0));

        let out = resolve(ItemKind::DiscoEgg, true, 100.0, 3.0, 4.0);
        assert_eq!(out.combo_y, ComboChange::Set(40.0));
    }

    #[test]
    fn rotten_egg_scales_with_score_and_reverses_controls() {
        let out = resolve(ItemKind::RottenEgg, false, 500.0, 0.0, 0.0);
        assert_eq!(out.score, ScoreChange::Add(-50.0));
        assert_eq!(out.reverses_controls, Some(true));

        // Floor of 10 on small scores.
        let out = resolve(ItemKind::RottenEgg, false, 20.0, 0.0, 0.0);
        assert_eq!(out.score, ScoreChange::Add(-10.0));

        // In combo the penalty lands on x and the combo ends.
        let out = resolve(ItemKind::RottenEgg, true, 100.0, 5.0, 1.0);
        assert_eq!(out.combo_x, ComboChange::Add(-25.0));
        assert_eq!(out.transition, ComboTransition::End);
    }

    #[test]
    fn ice_egg_cancels_in_combo_and_craters_the_score_otherwise() {
        let out = resolve(ItemKind::IceEgg, true, 100.0, 5.0, 2.0);
        assert_eq!(out.transition, ComboTransition::Cancel);
        assert_eq!(out.score, ScoreChange::None);

        let out = resolve(ItemKind::IceEgg, false, 100.0, 0.0, 0.0);
        assert_eq!(out.score, ScoreChange::Set(-9_900.0));
    }

    #[test]
    fn power_scorers_start_a_combo_out_of_combo() {
        for kind in [ItemKind::Mushroom, ItemKind::Frog, ItemKind::Pill] {
            let out = resolve(kind, false, 100.0, 0.0, 0.0);
            assert_eq!(out.transition, ComboTransition::Start);
            assert_eq!(out.notice, Some(EffectNotice::HighChime));
            assert!(!out.grows_snake);
        }
    }

    #[test]
    fn power_scorers_fold_negative_scores_downward() {
        let out = resolve(ItemKind::Mushroom, false, -100.0, 0.0, 0.0);
        assert_eq!(out.score, ScoreChange::Set(-1.0));

        let out = resolve(ItemKind::Pill, false, -4.0, 0.0, 0.0);
        assert_eq!(out.score, ScoreChange::Set(-8.0));

        let out = resolve(ItemKind::Frog, false, -100.0, 0.0, 0.0);
        let expected = 100.0 - 100.0_f64.powf(1.15);
        assert_eq!(out.score, ScoreChange::Set(expected));
        assert!(expected < 0.0);
    }

    #[test]
    fn dew_drop_rectifies_and_restores_controls() {
        let out = resolve(ItemKind::DewDrop, false, -40.0, 0.0, 0.0);
        assert_eq!(out.score, ScoreChange::Set(40.0));
        assert_eq!(out.reverses_controls, Some(false));

        let out = resolve(ItemKind::DewDrop, true, 0.0, -3.0, -2.0);
        assert_eq!(out.combo_x, ComboChange::Set(3.0));
        assert_eq!(out.combo_y, ComboChange::Set(2.0));
        assert_eq!(out.transition, ComboTransition::End);
    }

    #[test]
    fn skull_always_cancels_and_jolts_to_a_known_value() {
        let mut rng = SimpleRng::new(11);
        for _ in 0..50 {
            let out = apply(ItemKind::Skull, true, 500.0, 5.0, 5.0, &mut rng);
            assert_eq!(out.transition, ComboTransition::Cancel);
            match out.score {
                ScoreChange::Set(v) => {
                    assert!(
                        v == -9_999.0 || v == 10_499.0 || v == 0.0 || v == -9_499.0,
                        "unexpected jolt {v}"
                    );
                }
                other => panic!("unexpected change {other:?}"),
            }
        }
    }
}
