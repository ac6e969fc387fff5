/// Heuristic entropy estimate in bits: password length times log2 of the
/// combined size of every character class the password touches.
///
/// Classes are ASCII lowercase (26), ASCII uppercase (26), ASCII digits (10)
/// and a 32-character catch-all for everything else. This is a coarse upper
/// bound; it knows nothing about dictionary words or keyboard walks.
pub fn entropy(password: &str) -> f64 {
    let mut charset = 0u32;

    if password.chars().any(|c| c.is_ascii_lowercase()) {
        charset += 26;
    }
    if password.chars().any(|c| c.is_ascii_uppercase()) {
        charset += 26;
    }
    if password.chars().any(|c| c.is_ascii_digit()) {
        charset += 10;
    }
    if password.chars().any(|c| !c.is_ascii_alphanumeric()) {
        charset += 32;
    }

    if charset == 0 {
        return 0.0;
    }

    password.chars().count() as f64 * f64::from(charset).log2()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strength {
    VeryWeak,
    Weak,
    Moderate,
    Strong,
    VeryStrong,
}

impl Strength {
    /// Step function over entropy bits. Band boundaries are inclusive on
    /// the upper band: exactly 28.0 bits is already Weak, not Very Weak.
    pub fn classify(bits: f64) -> Self {
        if bits < 28.0 {
            Strength::VeryWeak
        } else if bits < 36.0 {
            Strength::Weak
        } else if bits < 60.0 {
            Strength::Moderate
        } else if bits < 90.0 {
            Strength::Strong
        } else {
            Strength::VeryStrong
        }
    }

    pub fn is_acceptable(self) -> bool {
        matches!(self, Strength::Strong | Strength::VeryStrong)
    }
}

impl std::fmt::Display for Strength {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Strength::VeryWeak => "Very Weak",
            Strength::Weak => "Weak",
            Strength::Moderate => "Moderate",
            Strength::Strong => "Strong",
            Strength::VeryStrong => "Very Strong",
        };
        f.write_str(label)
    }
}
