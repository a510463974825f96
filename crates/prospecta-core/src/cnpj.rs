//! CNPJ helpers.
//!
//! The registry splits the 14-digit CNPJ into a base (8 digits), a branch order
//! (4 digits) and check digits (2 digits), each stored without leading zeros.

/// Rebuilds the 14-digit CNPJ from its registry parts, zero-padding each one.
#[must_use]
pub fn compose_cnpj(basico: &str, ordem: &str, dv: &str) -> String {
    format!(
        "{:0>8}{:0>4}{:0>2}",
        basico.trim(),
        ordem.trim(),
        dv.trim()
    )
}

/// Formats a 14-digit CNPJ as `NN.NNN.NNN/NNNN-NN`.
///
/// Any input that is not exactly 14 ASCII digits is returned unchanged.
#[must_use]
pub fn format_cnpj(cnpj: &str) -> String {
    if cnpj.len() != 14 || !cnpj.bytes().all(|b| b.is_ascii_digit()) {
        return cnpj.to_owned();
    }
    format!(
        "{}.{}.{}/{}-{}",
        &cnpj[0..2],
        &cnpj[2..5],
        &cnpj[5..8],
        &cnpj[8..12],
        &cnpj[12..14]
    )
}
