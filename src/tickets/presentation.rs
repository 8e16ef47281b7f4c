use serde::Serialize;

use super::availability::RankedTicket;

/// How many tickets the listing page shows in its hero row.
const TOP_ROW_LEN: usize = 2;

/// A ticket placed in the lower grid. `display_index` is only used by the
/// client for keying and animation order; it must be reproducible across
/// renders of the same listing.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlacedTicket {
    #[serde(flatten)]
    pub ticket: RankedTicket,
    pub display_index: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketListing {
    pub top_tickets: Vec<RankedTicket>,
    pub bottom_tickets: Vec<PlacedTicket>,
}

/// Splits the ranked sequence into the hero row (first two) and the rest.
///
/// With fewer than two tickets the hero row takes everything and the grid
/// is empty. Grid entry `i` is tagged with `i + grid_len`.
pub fn split_listing(mut ranked: Vec<RankedTicket>) -> TicketListing {
    let bottom = if ranked.len() > TOP_ROW_LEN {
        ranked.split_off(TOP_ROW_LEN)
    } else {
        Vec::new()
    };
    let bottom_len = bottom.len();

    TicketListing {
        top_tickets: ranked,
        bottom_tickets: bottom
            .into_iter()
            .enumerate()
            .map(|(i, ticket)| PlacedTicket {
                ticket,
                display_index: i + bottom_len,
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ticket::TicketSummary;
    use rust_decimal_macros::dec;
    use uuid::Uuid;

    fn ranked(name: &str) -> RankedTicket {
        RankedTicket {
            ticket: TicketSummary {
                id: Uuid::new_v4(),
                name: name.to_string(),
                price: dec!(250_000),
                description: String::new(),
                early_bird: false,
                features: Vec::new(),
            },
            sold_out: false,
        }
    }

    #[test]
    fn splits_at_two_and_keeps_order() {
        let input: Vec<RankedTicket> = ["A", "B", "C", "D", "E"].map(ranked).into();

        let listing = split_listing(input.clone());

        assert_eq!(listing.top_tickets, input[..2]);
        assert_eq!(listing.top_tickets.len() + listing.bottom_tickets.len(), input.len());
        let bottom: Vec<&str> = listing
            .bottom_tickets
            .iter()
            .map(|p| p.ticket.ticket.name.as_str())
            .collect();
        assert_eq!(bottom, ["C", "D", "E"]);
    }

    #[test]
    fn grid_indices_are_offset_by_grid_length() {
        let input: Vec<RankedTicket> = ["A", "B", "C", "D", "E"].map(ranked).into();

        let listing = split_listing(input);

        let indices: Vec<usize> = listing
            .bottom_tickets
            .iter()
            .map(|p| p.display_index)
            .collect();
        assert_eq!(indices, [3, 4, 5]);
    }

    #[test]
    fn single_ticket_fills_the_hero_row() {
        let listing = split_listing(vec![ranked("A")]);

        assert_eq!(listing.top_tickets.len(), 1);
        assert!(listing.bottom_tickets.is_empty());
    }

    #[test]
    fn exactly_two_tickets_leave_the_grid_empty() {
        let listing = split_listing(vec![ranked("A"), ranked("B")]);

        assert_eq!(listing.top_tickets.len(), 2);
        assert!(listing.bottom_tickets.is_empty());
    }

    #[test]
    fn empty_listing_stays_empty() {
        let listing = split_listing(Vec::new());

        assert!(listing.top_tickets.is_empty());
        assert!(listing.bottom_tickets.is_empty());
    }
}
