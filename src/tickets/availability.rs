use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::ticket::TicketSummary;

/// Per-ticket quota consumption, read at a single snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuotaUsage {
    pub ticket_id: Uuid,
    pub quota: i32,
    pub completed: i64,
}

/// A ticket as presented on the listing page, carrying its sold-out flag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedTicket {
    #[serde(flatten)]
    pub ticket: TicketSummary,
    pub sold_out: bool,
}

/// Computes the sold-out flag for every ticket in `usage`.
///
/// A ticket is sold out once its completed transaction count reaches its
/// quota. The comparison is literal: a zero-quota ticket with zero sales
/// reports as sold out.
pub fn sold_out_by_ticket(usage: &[QuotaUsage]) -> HashMap<Uuid, bool> {
    usage
        .iter()
        .map(|u| (u.ticket_id, u.completed >= i64::from(u.quota)))
        .collect()
}

/// Orders tickets available-first.
///
/// The sort is stable: tickets with the same sold-out flag keep their
/// creation-time order from the input. A ticket id missing from `sold_out`
/// is treated as not sold out rather than failing the render.
pub fn rank_by_availability(
    tickets: Vec<TicketSummary>,
    sold_out: &HashMap<Uuid, bool>,
) -> Vec<RankedTicket> {
    let mut ranked: Vec<RankedTicket> = tickets
        .into_iter()
        .map(|ticket| RankedTicket {
            sold_out: sold_out.get(&ticket.id).copied().unwrap_or(false),
            ticket,
        })
        .collect();

    // Vec::sort_by_key is stable, so ties keep their input order.
    ranked.sort_by_key(|t| t.sold_out);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn summary(id: Uuid, name: &str) -> TicketSummary {
        TicketSummary {
            id,
            name: name.to_string(),
            price: dec!(100_000),
            description: format!("{name} ticket"),
            early_bird: false,
            features: Vec::new(),
        }
    }

    fn usage(ticket_id: Uuid, quota: i32, completed: i64) -> QuotaUsage {
        QuotaUsage {
            ticket_id,
            quota,
            completed,
        }
    }

    #[test]
    fn sold_out_once_completed_count_reaches_quota() {
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        let c = Uuid::new_v4();

        let flags = sold_out_by_ticket(&[
            usage(a, 10, 10),
            usage(b, 5, 2),
            usage(c, 1, 1),
        ]);

        assert!(flags[&a]);
        assert!(!flags[&b]);
        assert!(flags[&c]);
    }

    #[test]
    fn every_input_ticket_gets_a_flag() {
        let ids: Vec<Uuid> = (0..4).map(|_| Uuid::new_v4()).collect();
        let rows: Vec<QuotaUsage> = ids.iter().map(|&id| usage(id, 100, 0)).collect();

        let flags = sold_out_by_ticket(&rows);

        assert_eq!(flags.len(), ids.len());
        assert!(ids.iter().all(|id| !flags[id]));
    }

    #[test]
    fn zero_quota_with_zero_sales_reports_sold_out() {
        let id = Uuid::new_v4();
        let flags = sold_out_by_ticket(&[usage(id, 0, 0)]);
        assert!(flags[&id]);
    }

    #[test]
    fn oversold_ticket_stays_sold_out() {
        let id = Uuid::new_v4();
        let flags = sold_out_by_ticket(&[usage(id, 5, 7)]);
        assert!(flags[&id]);
    }

    #[test]
    fn available_tickets_come_first_and_ties_keep_creation_order() {
        let a = summary(Uuid::new_v4(), "Supporter");
        let b = summary(Uuid::new_v4(), "Regular");
        let c = summary(Uuid::new_v4(), "Student");

        let flags = sold_out_by_ticket(&[
            usage(a.id, 10, 10),
            usage(b.id, 5, 2),
            usage(c.id, 1, 1),
        ]);

        let ranked = rank_by_availability(vec![a.clone(), b.clone(), c.clone()], &flags);

        let names: Vec<&str> = ranked.iter().map(|t| t.ticket.name.as_str()).collect();
        assert_eq!(names, ["Regular", "Supporter", "Student"]);
        assert_eq!(
            ranked.iter().map(|t| t.sold_out).collect::<Vec<_>>(),
            [false, true, true]
        );
    }

    #[test]
    fn ranking_drops_and_duplicates_nothing() {
        let tickets: Vec<TicketSummary> = (0..5)
            .map(|i| summary(Uuid::new_v4(), &format!("T{i}")))
            .collect();
        let flags: HashMap<Uuid, bool> = tickets
            .iter()
            .enumerate()
            .map(|(i, t)| (t.id, i % 2 == 0))
            .collect();

        let ranked = rank_by_availability(tickets.clone(), &flags);

        assert_eq!(ranked.len(), tickets.len());
        for t in &tickets {
            assert_eq!(ranked.iter().filter(|r| r.ticket.id == t.id).count(), 1);
        }
    }

    #[test]
    fn ticket_missing_from_the_map_defaults_to_available() {
        let known = summary(Uuid::new_v4(), "Known");
        let unknown = summary(Uuid::new_v4(), "Unknown");

        let flags = sold_out_by_ticket(&[usage(known.id, 1, 1)]);
        let ranked = rank_by_availability(vec![known, unknown], &flags);

        assert_eq!(ranked[0].ticket.name, "Unknown");
        assert!(!ranked[0].sold_out);
        assert!(ranked[1].sold_out);
    }

    #[test]
    fn all_available_keeps_creation_order() {
        let tickets: Vec<TicketSummary> = ["Patron", "Regular", "Student"]
            .iter()
            .map(|n| summary(Uuid::new_v4(), n))
            .collect();
        let flags: HashMap<Uuid, bool> = tickets.iter().map(|t| (t.id, false)).collect();

        let ranked = rank_by_availability(tickets, &flags);

        let names: Vec<&str> = ranked.iter().map(|t| t.ticket.name.as_str()).collect();
        assert_eq!(names, ["Patron", "Regular", "Student"]);
    }
}
