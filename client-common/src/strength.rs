//! Heuristic password strength.
//!
//! Scoring and presentation are kept apart: [`score`] is a pure function of the
//! password, [`classify`] maps a score to what the gauge shows. Front-ends call
//! [`evaluate`] on every change of the password field, there is no caching.

use strum_macros::{Display, EnumIter};

pub const MAX_SCORE: u32 = 10;

/// Scores a password from 0 to [`MAX_SCORE`]. Absent and empty passwords score 0.
///
/// The result is not clamped, only [`classify`] caps the percentage.
pub fn score<'a>(password: impl Into<Option<&'a str>>) -> u32 {
    let password = match password.into() {
        Some(p) if !p.is_empty() => p,
        _ => return 0,
    };

    let mut score = 0;

    let len = password.chars().count();
    if len >= 8 {
        score += 3;
    } else if len >= 6 {
        score += 1;
    }

    if password.chars().any(|c| c.is_ascii_lowercase()) {
        score += 1;
    }
    if password.chars().any(|c| c.is_ascii_uppercase()) {
        score += 1;
    }
    if password.chars().any(|c| c.is_ascii_digit()) {
        score += 2;
    }
    // anything but [A-Za-z0-9], non-ascii letters included
    if password.chars().any(|c| !c.is_ascii_alphanumeric()) {
        score += 3;
    }

    score
}

#[derive(Display, EnumIter, Debug, Clone, Copy, PartialEq, Eq)]
#[strum(serialize_all = "lowercase")]
pub enum Tier {
    Weak,
    Ok,
    Strong,
}

impl Tier {
    pub fn from_score(score: u32) -> Self {
        match score {
            0..=2 => Tier::Weak,
            3..=5 => Tier::Ok,
            _ => Tier::Strong,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Tier::Weak => "Paper Armor (Very weak)",
            Tier::Ok => "Leather Armor (OK)",
            Tier::Strong => "Diamond Armor (Strong)",
        }
    }

    pub fn accent(self) -> Accent {
        match self {
            Tier::Weak => Accent::Danger,
            Tier::Ok => Accent::Warning,
            Tier::Strong => Accent::Success,
        }
    }
}

/// Visual treatment of a tier. Displays as the css class suffix.
#[derive(Display, Debug, Clone, Copy, PartialEq, Eq)]
#[strum(serialize_all = "lowercase")]
pub enum Accent {
    Danger,  // red
    Warning, // yellow
    Success, // green
}

impl Accent {
    pub fn css_class(self) -> String {
        format!("bg-{}", self)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    pub tier: Tier,
    pub label: &'static str,
    pub percent: u32,
}

impl Classification {
    pub fn accent(&self) -> Accent {
        self.tier.accent()
    }

    /// Class attribute of the `strengthBar` element.
    pub fn bar_class(&self) -> String {
        format!("progress-bar {}", self.accent().css_class())
    }

    /// Width style of the `strengthBar` element.
    pub fn bar_width(&self) -> String {
        format!("{}%", self.percent)
    }

    /// Content of the `strengthText` element.
    pub fn text(&self) -> String {
        format!("Armor: {}", self.label)
    }
}

pub fn classify(score: u32) -> Classification {
    let tier = Tier::from_score(score);
    Classification {
        tier,
        label: tier.label(),
        percent: score.saturating_mul(10).min(100),
    }
}

pub fn evaluate<'a>(password: impl Into<Option<&'a str>>) -> Classification {
    classify(score(password))
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn empty_and_absent_score_zero() {
        assert_eq!(score(""), 0);
        assert_eq!(score(None::<&str>), 0);
    }

    #[test]
    fn lowercase_only() {
        assert_eq!(score("abcdefgh"), 4);
        assert_eq!(score("abc"), 1);
    }

    #[test]
    fn mixed_case_and_digits() {
        let s = score("Abcdef12");
        assert_eq!(s, 7);
        let c = classify(s);
        assert_eq!(c.tier, Tier::Strong);
        assert_eq!(c.percent, 70);
    }

    #[test]
    fn six_chars_only_get_the_small_length_bonus() {
        // 1 (length) + 1 (lower) + 2 (digit) + 3 (symbol)
        assert_eq!(score("ab12!@"), 7);
        assert_eq!(evaluate("ab12!@").tier, Tier::Strong);
        assert_eq!(score("abcde"), 1);
        assert_eq!(score("abcdef"), 2);
        assert_eq!(score("abcdefg"), 2);
    }

    #[test]
    fn every_class_reaches_max() {
        assert_eq!(score("Abcdef1!"), MAX_SCORE);
        assert_eq!(score("Some Long Passphrase 42"), MAX_SCORE);
    }

    #[test]
    fn space_and_non_ascii_count_as_symbols() {
        assert_eq!(score(" "), 3);
        assert_eq!(score("é"), 3);
        // length is counted in chars, not bytes
        assert_eq!(score("ééééé"), 3);
        assert_eq!(score("éééééé"), 4);
    }

    #[test]
    fn digits_only() {
        assert_eq!(score("12345678"), 5);
        assert_eq!(evaluate("12345678").tier, Tier::Ok);
    }

    #[test]
    fn classify_boundaries() {
        assert_eq!(classify(0).percent, 0);
        assert_eq!(classify(11).percent, 100);
        assert_eq!(classify(u32::MAX).percent, 100);
        assert_eq!(classify(2).tier, Tier::Weak);
        assert_eq!(classify(3).tier, Tier::Ok);
        assert_eq!(classify(5).tier, Tier::Ok);
        assert_eq!(classify(6).tier, Tier::Strong);
    }

    #[test]
    fn labels_and_accents() {
        let weak = classify(1);
        assert_eq!(weak.label, "Paper Armor (Very weak)");
        assert_eq!(weak.bar_class(), "progress-bar bg-danger");
        assert_eq!(weak.bar_width(), "10%");
        assert_eq!(weak.text(), "Armor: Paper Armor (Very weak)");

        let ok = classify(4);
        assert_eq!(ok.label, "Leather Armor (OK)");
        assert_eq!(ok.accent(), Accent::Warning);

        let strong = classify(10);
        assert_eq!(strong.label, "Diamond Armor (Strong)");
        assert_eq!(strong.bar_class(), "progress-bar bg-success");
    }

    #[test]
    fn every_tier_has_a_distinct_accent() {
        let accents: Vec<_> = Tier::iter().map(Tier::accent).collect();
        assert_eq!(accents, vec![Accent::Danger, Accent::Warning, Accent::Success]);
        assert_eq!(Tier::Ok.to_string(), "ok");
    }
}
