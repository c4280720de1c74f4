/// How a single select/deselect pair treats the chip-select line.
///
/// Only one side of the pair is ever affected; the bus transaction is always
/// opened by `select` and closed by `deselect`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TransferType {
    /// Assert CS on select and release it on deselect.
    #[default]
    Normal,
    /// Open the transaction but leave CS as it is (already asserted).
    NoStartCs,
    /// Close the transaction but keep CS asserted for the next phase.
    NoEndCs,
}

impl TransferType {
    pub const fn asserts_cs(self) -> bool {
        !matches!(self, TransferType::NoStartCs)
    }

    pub const fn releases_cs(self) -> bool {
        !matches!(self, TransferType::NoEndCs)
    }
}

#[cfg(test)]
mod tests {
    use super::TransferType;

    #[test]
    fn default_is_normal() {
        assert_eq!(TransferType::default(), TransferType::Normal);
    }

    #[test]
    fn each_flag_touches_one_side_only() {
        assert!(TransferType::Normal.asserts_cs());
        assert!(TransferType::Normal.releases_cs());

        assert!(!TransferType::NoStartCs.asserts_cs());
        assert!(TransferType::NoStartCs.releases_cs());

        assert!(TransferType::NoEndCs.asserts_cs());
        assert!(!TransferType::NoEndCs.releases_cs());
    }
}
