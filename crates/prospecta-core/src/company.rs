const UNNAMED_COMPANY: &str = "Empresa sem nome";

/// A company (establishment) from the CNPJ registry.
///
/// Only `cnpj` and `legal_name` are guaranteed; everything else is filled in
/// when the registry has it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Company {
    /// Full 14-digit CNPJ, digits only.
    pub cnpj: String,
    /// Razão social.
    pub legal_name: String,
    /// Nome fantasia.
    pub trade_name: Option<String>,
    pub website: Option<String>,
    pub email: Option<String>,
    pub ddd: Option<String>,
    pub phone: Option<String>,
    pub street: Option<String>,
    pub number: Option<String>,
    pub complement: Option<String>,
    pub district: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip: Option<String>,
}

fn field(value: Option<&String>) -> &str {
    value.map_or("", |s| s.trim())
}

impl Company {
    #[must_use]
    pub fn new(cnpj: &str, legal_name: &str) -> Self {
        Self {
            cnpj: cnpj.to_owned(),
            legal_name: legal_name.to_owned(),
            ..Self::default()
        }
    }

    /// Name shown to salespeople: trade name, then legal name, then a placeholder.
    #[must_use]
    pub fn display_name(&self) -> String {
        let trade = field(self.trade_name.as_ref());
        if !trade.is_empty() {
            return trade.to_owned();
        }
        let legal = self.legal_name.trim();
        if !legal.is_empty() {
            return legal.to_owned();
        }
        UNNAMED_COMPANY.to_owned()
    }

    /// Phone as `(DDD) NUMBER`, the bare number when the area code is missing,
    /// or an empty string.
    #[must_use]
    pub fn full_phone(&self) -> String {
        let ddd = field(self.ddd.as_ref());
        let phone = field(self.phone.as_ref());
        match (ddd.is_empty(), phone.is_empty()) {
            (false, false) => format!("({ddd}) {phone}"),
            (_, false) => phone.to_owned(),
            _ => String::new(),
        }
    }

    /// Single-line postal address in the layout the CRM expects. The
    /// complement (`Sala 3`, `Loja B`) follows the number when present.
    #[must_use]
    pub fn address_line(&self) -> String {
        let number = field(self.number.as_ref());
        let complement = field(self.complement.as_ref());
        let number = if complement.is_empty() {
            number.to_owned()
        } else {
            format!("{number} {complement}")
        };
        format!(
            "{}, {}, {}, {} - {}, CEP {}",
            field(self.street.as_ref()),
            number,
            field(self.district.as_ref()),
            field(self.city.as_ref()),
            field(self.state.as_ref()),
            field(self.zip.as_ref()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_name_prefers_trade_name() {
        let mut company = Company::new("12345678000195", "Confecções Aurora LTDA");
        company.trade_name = Some("  Aurora Moda ".to_owned());
        assert_eq!(company.display_name(), "Aurora Moda");
    }

    #[test]
    fn display_name_falls_back_to_legal_name_when_trade_name_blank() {
        let mut company = Company::new("12345678000195", "Confecções Aurora LTDA");
        company.trade_name = Some("   ".to_owned());
        assert_eq!(company.display_name(), "Confecções Aurora LTDA");
    }

    #[test]
    fn display_name_placeholder_when_nameless() {
        let company = Company::new("12345678000195", " ");
        assert_eq!(company.display_name(), "Empresa sem nome");
    }

    #[test]
    fn full_phone_with_area_code() {
        let mut company = Company::new("1", "X");
        company.ddd = Some("85".to_owned());
        company.phone = Some("32221100".to_owned());
        assert_eq!(company.full_phone(), "(85) 32221100");
    }

    #[test]
    fn full_phone_without_area_code() {
        let mut company = Company::new("1", "X");
        company.phone = Some("32221100".to_owned());
        assert_eq!(company.full_phone(), "32221100");
    }

    #[test]
    fn full_phone_empty_when_no_number() {
        let mut company = Company::new("1", "X");
        company.ddd = Some("85".to_owned());
        assert_eq!(company.full_phone(), "");
    }

    #[test]
    fn address_line_layout() {
        let company = Company {
            street: Some("Rua Monsenhor Tabosa".to_owned()),
            number: Some("1200".to_owned()),
            district: Some("Meireles".to_owned()),
            city: Some("Fortaleza".to_owned()),
            state: Some("CE".to_owned()),
            zip: Some("60165010".to_owned()),
            ..Company::new("1", "X")
        };
        assert_eq!(
            company.address_line(),
            "Rua Monsenhor Tabosa, 1200, Meireles, Fortaleza - CE, CEP 60165010"
        );
    }

    #[test]
    fn address_line_includes_complement() {
        let company = Company {
            street: Some("Av. Bezerra de Menezes".to_owned()),
            number: Some("500".to_owned()),
            complement: Some(" Loja 12 ".to_owned()),
            district: Some("São Gerardo".to_owned()),
            city: Some("Fortaleza".to_owned()),
            state: Some("CE".to_owned()),
            zip: Some("60325000".to_owned()),
            ..Company::new("1", "X")
        };
        assert_eq!(
            company.address_line(),
            "Av. Bezerra de Menezes, 500 Loja 12, São Gerardo, Fortaleza - CE, CEP 60325000"
        );
    }
}
