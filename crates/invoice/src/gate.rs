//! Passphrase gate for the interactive surface

/// Session gate guarded by a single shared passphrase
///
/// The configured secret is at most six characters. A successful unlock
/// sets a per-session flag; there is no expiry and no lockout. The
/// comparison always scans the full candidate so timing does not leak
/// the match prefix length.
#[derive(Debug, Clone)]
pub struct AccessGate {
    secret: String,
    unlocked: bool,
}

impl AccessGate {
    /// Maximum passphrase length accepted by the input field
    pub const MAX_CODE_LEN: usize = 6;

    pub fn new(secret: &str) -> Self {
        Self {
            secret: secret.trim().to_string(),
            unlocked: false,
        }
    }

    /// Try a passphrase; surrounding whitespace is ignored
    pub fn unlock(&mut self, code: &str) -> bool {
        if constant_eq(code.trim().as_bytes(), self.secret.as_bytes()) {
            self.unlocked = true;
        }
        self.unlocked
    }

    pub fn is_unlocked(&self) -> bool {
        self.unlocked
    }
}

/// Byte comparison without an early exit on mismatch
fn constant_eq(a: &[u8], b: &[u8]) -> bool {
    let mut diff = a.len() ^ b.len();
    for i in 0..a.len().max(b.len()) {
        let x = a.get(i).copied().unwrap_or(0);
        let y = b.get(i).copied().unwrap_or(0);
        diff |= (x ^ y) as usize;
    }
    diff == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_locked() {
        let gate = AccessGate::new("A1B2C3");
        assert!(!gate.is_unlocked());
    }

    #[test]
    fn test_correct_code_unlocks() {
        let mut gate = AccessGate::new("A1B2C3");
        assert!(gate.unlock("A1B2C3"));
        assert!(gate.is_unlocked());
    }

    #[test]
    fn test_wrong_code_stays_locked() {
        let mut gate = AccessGate::new("A1B2C3");
        assert!(!gate.unlock("A1B2C4"));
        assert!(!gate.unlock("A1B2C"));
        assert!(!gate.unlock(""));
        assert!(!gate.is_unlocked());
    }

    #[test]
    fn test_whitespace_trimmed_both_sides() {
        let mut gate = AccessGate::new(" A1B2C3 ");
        assert!(gate.unlock("  A1B2C3\n"));
    }

    #[test]
    fn test_unlock_is_sticky() {
        let mut gate = AccessGate::new("A1B2C3");
        gate.unlock("A1B2C3");
        assert!(gate.unlock("wrong"));
        assert!(gate.is_unlocked());
    }
}
