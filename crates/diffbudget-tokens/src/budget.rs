/// Running token total for one compression call.
///
/// `reserve` is all-or-nothing, so a failed reservation leaves the budget exactly
/// as it was.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenBudget {
    max_tokens: usize,
    consumed: usize,
}

impl TokenBudget {
    pub fn new(max_tokens: usize) -> Self {
        Self {
            max_tokens,
            consumed: 0,
        }
    }

    /// Commit `tokens` if they fit. Returns whether the reservation happened.
    pub fn reserve(&mut self, tokens: usize) -> bool {
        match self.consumed.checked_add(tokens) {
            Some(total) if total <= self.max_tokens => {
                self.consumed = total;
                true
            }
            _ => false,
        }
    }

    /// Whether `tokens` would fit without committing them.
    pub fn fits(&self, tokens: usize) -> bool {
        tokens <= self.remaining()
    }

    pub fn remaining(&self) -> usize {
        self.max_tokens.saturating_sub(self.consumed)
    }

    pub fn consumed(&self) -> usize {
        self.consumed
    }

    pub fn max_tokens(&self) -> usize {
        self.max_tokens
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reserve_commits_when_it_fits() {
        let mut budget = TokenBudget::new(100);
        assert!(budget.reserve(60));
        assert_eq!(budget.consumed(), 60);
        assert_eq!(budget.remaining(), 40);
    }

    #[test]
    fn test_failed_reserve_leaves_budget_unchanged() {
        let mut budget = TokenBudget::new(100);
        assert!(budget.reserve(60));
        assert!(!budget.reserve(41));
        assert_eq!(budget.consumed(), 60);
        assert!(budget.reserve(40));
        assert_eq!(budget.remaining(), 0);
    }

    #[test]
    fn test_exact_fit_and_zero_reservations() {
        let mut budget = TokenBudget::new(10);
        assert!(budget.reserve(10));
        assert!(budget.reserve(0));
        assert!(!budget.reserve(1));
        assert!(budget.fits(0));
        assert!(!budget.fits(1));
    }

    #[test]
    fn test_overflow_is_rejected() {
        let mut budget = TokenBudget::new(usize::MAX);
        assert!(budget.reserve(usize::MAX - 1));
        assert!(!budget.reserve(usize::MAX));
        assert_eq!(budget.consumed(), usize::MAX - 1);
    }
}
