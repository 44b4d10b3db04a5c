/// One quote request as received from the form. Transmitted, never
/// persisted: the value lives for a single relay and is then discarded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuoteRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub insurance_type: String,
    /// Optional free text; `None` and the empty string are treated alike.
    pub message: Option<String>,
}

impl QuoteRequest {
    /// The optional message, normalized so a present-but-empty string does
    /// not produce an empty "Additional Information" section.
    pub fn message_text(&self) -> Option<&str> {
        self.message.as_deref().filter(|m| !m.is_empty())
    }
}

/// The insurance lines offered on the quote form selector.
///
/// The server stays permissive and relays any non-empty `insuranceType`
/// string; this catalog backs the client-side selector only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsuranceType {
    Auto,
    Home,
    Life,
    Boat,
    Motorcycle,
    Renters,
    Commercial,
    Other,
}

impl InsuranceType {
    pub const ALL: [InsuranceType; 8] = [
        InsuranceType::Auto,
        InsuranceType::Home,
        InsuranceType::Life,
        InsuranceType::Boat,
        InsuranceType::Motorcycle,
        InsuranceType::Renters,
        InsuranceType::Commercial,
        InsuranceType::Other,
    ];

    /// Label shown in the selector and transmitted as `insuranceType`.
    pub fn label(&self) -> &'static str {
        match self {
            InsuranceType::Auto => "Auto Insurance",
            InsuranceType::Home => "Home Insurance",
            InsuranceType::Life => "Life Insurance",
            InsuranceType::Boat => "Boat Insurance",
            InsuranceType::Motorcycle => "Motorcycle Insurance",
            InsuranceType::Renters => "Renters Insurance",
            InsuranceType::Commercial => "Commercial Insurance",
            InsuranceType::Other => "Other",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_text_filters_empty() {
        let mut quote = QuoteRequest {
            name: "Test User".to_string(),
            email: "test@example.com".to_string(),
            phone: "555-1234".to_string(),
            insurance_type: "Auto Insurance".to_string(),
            message: None,
        };
        assert_eq!(quote.message_text(), None);

        quote.message = Some(String::new());
        assert_eq!(quote.message_text(), None);

        quote.message = Some("Two cars, one driver".to_string());
        assert_eq!(quote.message_text(), Some("Two cars, one driver"));
    }

    #[test]
    fn test_selector_catalog_labels() {
        assert_eq!(InsuranceType::ALL.len(), 8);
        assert_eq!(InsuranceType::Auto.label(), "Auto Insurance");
        assert_eq!(InsuranceType::Other.label(), "Other");
    }
}
