use serde::Serialize;

/// Target of the "Buy Ticket" call to action. `Login` means the client
/// routes the visitor to its local sign-in page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum PurchaseAction {
    /// Hand the visitor to the external checkout flow.
    External { url: String },
    /// Send the visitor to the local sign-in route first.
    Login,
}

/// Decides where the "Buy Ticket" button points.
///
/// Holds the externally configured checkout base URL, handed in at
/// construction. The purchase URL is the base with the buyer's profile id
/// appended verbatim; the base is expected to carry its own trailing
/// separator.
#[derive(Debug, Clone)]
pub struct PurchaseActionResolver {
    ticket_service_url: String,
}

impl PurchaseActionResolver {
    pub fn new(ticket_service_url: impl Into<String>) -> Self {
        Self {
            ticket_service_url: ticket_service_url.into(),
        }
    }

    /// Signed-in visitors go to checkout; everyone else goes to sign-in.
    /// No other branching.
    pub fn resolve(&self, user_id: Option<&str>) -> PurchaseAction {
        match user_id {
            Some(id) => PurchaseAction::External {
                url: format!("{}{}", self.ticket_service_url, id),
            },
            None => PurchaseAction::Login,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signed_in_visitor_gets_the_checkout_url() {
        let resolver = PurchaseActionResolver::new("https://tix.example.com/");

        let action = resolver.resolve(Some("u1"));

        assert_eq!(
            action,
            PurchaseAction::External {
                url: "https://tix.example.com/u1".to_string()
            }
        );
    }

    #[test]
    fn anonymous_visitor_is_sent_to_sign_in() {
        let resolver = PurchaseActionResolver::new("https://tix.example.com/");
        assert_eq!(resolver.resolve(None), PurchaseAction::Login);
    }

    #[test]
    fn buyer_id_is_appended_without_inserting_a_separator() {
        let resolver = PurchaseActionResolver::new("https://tix.example.com/buy?user=");

        let action = resolver.resolve(Some("abc-123"));

        assert_eq!(
            action,
            PurchaseAction::External {
                url: "https://tix.example.com/buy?user=abc-123".to_string()
            }
        );
    }

    #[test]
    fn login_action_serializes_with_only_its_kind() {
        let json = serde_json::to_value(PurchaseAction::Login).unwrap();
        assert_eq!(json, serde_json::json!({ "kind": "login" }));
    }

    #[test]
    fn external_action_serializes_kind_and_url() {
        let action = PurchaseAction::External {
            url: "https://tix.example.com/u1".to_string(),
        };
        let json = serde_json::to_value(action).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "kind": "external", "url": "https://tix.example.com/u1" })
        );
    }
}
