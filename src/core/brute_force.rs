use crate::domain::ports::{Thief, Vault};
use crate::utils::error::{ExerciseError, Result};

/// 以固定密碼建立的保險箱
#[derive(Debug, Clone)]
pub struct PasswordVault {
    password: Vec<char>,
    opened: bool,
}

impl PasswordVault {
    pub fn new(password: &str) -> Self {
        Self {
            password: password.chars().collect(),
            opened: false,
        }
    }
}

impl Vault for PasswordVault {
    fn password_len(&self) -> usize {
        self.password.len()
    }

    fn try_open(&mut self, attempt: &[char]) -> bool {
        if self.password.len() != attempt.len() {
            let err = ExerciseError::SizeMismatch {
                expected: self.password.len(),
                actual: attempt.len(),
            };
            tracing::warn!("{}", err);
            return false;
        }

        // 最後一次嘗試決定開啟狀態
        self.opened = self.password == attempt;

        if self.opened {
            tracing::info!("...click!...");
        }

        self.opened
    }

    fn is_opened(&self) -> bool {
        self.opened
    }
}

/// Guesses a vault password by enumerating every string of a given length
/// over a sorted character set, in lexicographic order.
#[derive(Debug)]
pub struct BruteForceAttacker<V: Vault = PasswordVault> {
    characters: Vec<char>,
    vault: Option<V>,
    attempts: u64,
}

impl<V: Vault> Default for BruteForceAttacker<V> {
    fn default() -> Self {
        Self {
            characters: Vec::new(),
            vault: None,
            attempts: 0,
        }
    }
}

impl BruteForceAttacker<PasswordVault> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn init(&mut self, characters: &[char], password: &str) -> Result<()> {
        self.init_with_vault(characters, PasswordVault::new(password))
    }
}

impl<V: Vault> BruteForceAttacker<V> {
    /// 只能呼叫一次；第二次呼叫會保留原本的狀態
    pub fn init_with_vault(&mut self, characters: &[char], vault: V) -> Result<()> {
        if self.vault.is_some() {
            tracing::error!("Function init has already been called");
            return Err(ExerciseError::AlreadyInitialized);
        }

        let mut sorted = characters.to_vec();
        sorted.sort_unstable();

        tracing::debug!(
            "Attacker initialized with {} characters, password length {}",
            sorted.len(),
            vault.password_len()
        );

        self.characters = sorted;
        self.vault = Some(vault);
        Ok(())
    }

    pub fn characters(&self) -> &[char] {
        &self.characters
    }

    pub fn is_opened(&self) -> bool {
        self.vault.as_ref().is_some_and(Vault::is_opened)
    }

    pub fn attempts(&self) -> u64 {
        self.attempts
    }

    pub fn vault(&self) -> Option<&V> {
        self.vault.as_ref()
    }

    /// Number of candidates of length `size`, or `None` if it overflows.
    pub fn search_space(&self, size: usize) -> Option<u128> {
        let exp = u32::try_from(size).ok()?;
        (self.characters.len() as u128).checked_pow(exp)
    }

    pub fn try_open(&mut self, input: &[char]) -> bool {
        let Some(vault) = self.vault.as_mut() else {
            tracing::warn!("try_open called before init");
            return false;
        };
        self.attempts += 1;
        vault.try_open(input)
    }

    pub fn break_password(&mut self, size: usize) -> Result<bool> {
        let expected = self
            .vault
            .as_ref()
            .ok_or(ExerciseError::NotInitialized)?
            .password_len();

        if expected != size {
            let err = ExerciseError::SizeMismatch {
                expected,
                actual: size,
            };
            tracing::warn!("{}", err);
            return Err(err);
        }

        tracing::debug!(
            "Starting exhaustive search over {:?} candidates",
            self.search_space(size)
        );

        let mut candidate = vec!['\0'; size];
        self.solve(&mut candidate, 0);

        Ok(self.is_opened())
    }

    fn solve(&mut self, candidate: &mut [char], depth: usize) {
        if self.is_opened() {
            return;
        }
        if depth == candidate.len() {
            self.try_open(candidate);
            return;
        }

        for i in 0..self.characters.len() {
            candidate[depth] = self.characters[i];
            self.solve(candidate, depth + 1);
            if self.is_opened() {
                return;
            }
        }
    }
}

impl<V: Vault> Thief for BruteForceAttacker<V> {
    fn characters(&self) -> &[char] {
        BruteForceAttacker::characters(self)
    }

    fn break_password(&mut self, size: usize) -> Result<bool> {
        BruteForceAttacker::break_password(self, size)
    }
}
