/// 暴力破解攻擊的目標
pub trait Vault {
    fn password_len(&self) -> usize;

    /// Returns true when `attempt` opens the vault. Attempts of the wrong
    /// length are rejected without changing the opened state.
    fn try_open(&mut self, attempt: &[char]) -> bool;

    fn is_opened(&self) -> bool;
}

/// Something that can attack a [`Vault`] by guessing fixed-length passwords.
pub trait Thief {
    fn characters(&self) -> &[char];
    fn break_password(&mut self, size: usize) -> crate::utils::error::Result<bool>;
}
