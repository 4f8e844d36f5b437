//! # Vote flow
//!
//! ```text
//! NotVoted ──request──▶ AuthRequired          (signed out)
//!          ──request──▶ Confirming ──confirm──▶ Succeeded ──acknowledge──▶ Voted { next_vote_at }
//! ```
//!
//! `AuthRequired` and `Confirming` return to `NotVoted` on cancel. The
//! countdown next to a counted vote is a projection of the server-provided
//! `next_vote_at`; the client never blocks a vote on its own clock.

use chrono::{DateTime, Duration, Utc};

use crate::i18n::Message;
use crate::models::Vote;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum VotePhase {
    #[default]
    NotVoted,
    AuthRequired,
    Confirming,
    Succeeded,
    Voted { next_vote_at: Option<DateTime<Utc>> },
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct VoteFlow {
    phase: VotePhase,
}

impl VoteFlow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start in `Voted` when `votes` holds an unexpired vote for `server_id`.
    pub fn from_votes(server_id: u64, votes: &[Vote], now: DateTime<Utc>) -> Self {
        match next_vote_for(votes, server_id) {
            Some(at) if at > now => Self {
                phase: VotePhase::Voted {
                    next_vote_at: Some(at),
                },
            },
            _ => Self::new(),
        }
    }

    pub fn phase(&self) -> VotePhase {
        self.phase
    }

    pub fn has_voted(&self) -> bool {
        matches!(self.phase, VotePhase::Succeeded | VotePhase::Voted { .. })
    }

    /// The vote button was pressed.
    pub fn request(&mut self, is_authenticated: bool) {
        if self.phase == VotePhase::NotVoted {
            self.phase = if is_authenticated {
                VotePhase::Confirming
            } else {
                VotePhase::AuthRequired
            };
        }
    }

    pub fn cancel(&mut self) {
        if matches!(self.phase, VotePhase::AuthRequired | VotePhase::Confirming) {
            self.phase = VotePhase::NotVoted;
        }
    }

    pub fn confirm(&mut self) {
        if self.phase == VotePhase::Confirming {
            self.phase = VotePhase::Succeeded;
        }
    }

    /// Settle a successful vote with the expiry the server reported, if any.
    pub fn acknowledge(&mut self, next_vote_at: Option<DateTime<Utc>>) {
        if self.phase == VotePhase::Succeeded {
            self.phase = VotePhase::Voted { next_vote_at };
        }
    }

    /// Reconcile with a freshly loaded vote list. A fresh flow is seeded from
    /// it and a confirmed vote is settled with the expiry it reports.
    pub fn settle(&mut self, server_id: u64, votes: &[Vote], now: DateTime<Utc>) {
        match self.phase {
            VotePhase::NotVoted => *self = Self::from_votes(server_id, votes, now),
            VotePhase::Succeeded => self.acknowledge(next_vote_for(votes, server_id)),
            _ => {}
        }
    }

    /// Drop back to `NotVoted` once the reported expiry has passed.
    pub fn refresh(&mut self, now: DateTime<Utc>) {
        if let VotePhase::Voted {
            next_vote_at: Some(at),
        } = self.phase
        {
            if at <= now {
                self.phase = VotePhase::NotVoted;
            }
        }
    }

    /// Time left until the next vote, never negative.
    pub fn remaining(&self, now: DateTime<Utc>) -> Option<Duration> {
        match self.phase {
            VotePhase::Voted {
                next_vote_at: Some(at),
            } => Some((at - now).max(Duration::zero())),
            _ => None,
        }
    }

    /// `HH:MM:SS` until the next vote; `None` when there is nothing to count down.
    pub fn countdown_label(&self, now: DateTime<Utc>) -> Option<String> {
        self.remaining(now).map(format_countdown)
    }

    /// Label of the vote button.
    pub fn button_message(&self) -> Message {
        match self.phase {
            VotePhase::NotVoted => Message::Vote,
            VotePhase::AuthRequired => Message::VoteAuthRequired,
            VotePhase::Confirming => Message::VoteConfirm,
            VotePhase::Succeeded | VotePhase::Voted { .. } => Message::VoteCounted,
        }
    }
}

/// `HH:MM:SS`; hours are not wrapped at 24.
pub fn format_countdown(remaining: Duration) -> String {
    let total = remaining.num_seconds().max(0);
    format!(
        "{:02}:{:02}:{:02}",
        total / 3600,
        (total % 3600) / 60,
        total % 60
    )
}

/// Latest `next_vote_at` reported for `server_id`.
pub fn next_vote_for(votes: &[Vote], server_id: u64) -> Option<DateTime<Utc>> {
    votes
        .iter()
        .filter(|vote| vote.server.id == server_id)
        .filter_map(|vote| vote.next_vote_at)
        .max()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ServerVote;

    fn t(secs: i64) -> DateTime<Utc> {
        DateTime::from_timestamp(1_700_000_000 + secs, 0).unwrap()
    }

    fn vote(server_id: u64, next: Option<DateTime<Utc>>) -> Vote {
        Vote {
            id: 1,
            ip_address: "127.0.0.1".to_string(),
            voted_at: "2025-01-01".to_string(),
            created_at: None,
            updated_at: None,
            server: ServerVote {
                id: server_id,
                url_slug: String::new(),
                announce_name: "Alpha".to_string(),
                website_url: None,
                rate: "5".to_string(),
                logo: None,
                votes_count: 0,
                rating_position: None,
                project: None,
                chronicle: None,
            },
            next_vote_at: next,
        }
    }

    #[test]
    fn test_signed_out_requires_auth() {
        let mut flow = VoteFlow::new();
        flow.request(false);
        assert_eq!(flow.phase(), VotePhase::AuthRequired);
        assert_eq!(flow.button_message(), Message::VoteAuthRequired);
        flow.confirm();
        assert_eq!(flow.phase(), VotePhase::AuthRequired);
        flow.cancel();
        assert_eq!(flow.phase(), VotePhase::NotVoted);
    }

    #[test]
    fn test_full_flow_with_countdown() {
        let mut flow = VoteFlow::new();
        flow.request(true);
        assert_eq!(flow.phase(), VotePhase::Confirming);
        flow.confirm();
        assert_eq!(flow.phase(), VotePhase::Succeeded);
        assert!(flow.has_voted());

        flow.acknowledge(Some(t(2 * 3600 + 61)));

        assert_eq!(flow.countdown_label(t(0)).as_deref(), Some("02:01:01"));
        assert_eq!(flow.countdown_label(t(10_000)).as_deref(), Some("00:00:00"));
        assert_eq!(flow.button_message(), Message::VoteCounted);

        flow.refresh(t(10_000));
        assert_eq!(flow.phase(), VotePhase::NotVoted);
    }

    #[test]
    fn test_voted_without_expiry_has_no_countdown() {
        let mut flow = VoteFlow::new();
        flow.request(true);
        flow.confirm();
        flow.acknowledge(None);

        assert!(flow.has_voted());
        assert_eq!(flow.countdown_label(t(0)), None);
        flow.refresh(t(1_000_000));
        assert!(flow.has_voted());
    }

    #[test]
    fn test_request_ignored_after_vote() {
        let mut flow = VoteFlow::from_votes(7, &[vote(7, Some(t(60)))], t(0));
        assert_eq!(
            flow.phase(),
            VotePhase::Voted {
                next_vote_at: Some(t(60))
            }
        );
        flow.request(true);
        assert!(flow.has_voted());
    }

    #[test]
    fn test_from_votes_ignores_other_and_expired() {
        let votes = [vote(1, Some(t(100))), vote(2, Some(t(-5)))];
        assert_eq!(VoteFlow::from_votes(2, &votes, t(0)).phase(), VotePhase::NotVoted);
        assert_eq!(VoteFlow::from_votes(3, &votes, t(0)).phase(), VotePhase::NotVoted);
        assert_eq!(next_vote_for(&votes, 1), Some(t(100)));
    }

    #[test]
    fn test_settle_uses_reloaded_votes() {
        let mut flow = VoteFlow::new();
        flow.settle(7, &[], t(0));
        assert_eq!(flow.phase(), VotePhase::NotVoted);

        flow.request(true);
        flow.settle(7, &[vote(7, Some(t(60)))], t(0));
        assert_eq!(flow.phase(), VotePhase::Confirming);

        flow.confirm();
        flow.settle(7, &[vote(7, Some(t(3600)))], t(0));
        assert_eq!(
            flow.phase(),
            VotePhase::Voted {
                next_vote_at: Some(t(3600))
            }
        );
        assert_eq!(flow.countdown_label(t(0)).as_deref(), Some("01:00:00"));

        flow.settle(7, &[], t(0));
        assert!(flow.has_voted());
    }

    #[test]
    fn test_format_countdown() {
        assert_eq!(format_countdown(Duration::seconds(0)), "00:00:00");
        assert_eq!(format_countdown(Duration::seconds(59)), "00:00:59");
        assert_eq!(format_countdown(Duration::hours(25)), "25:00:00");
        assert_eq!(format_countdown(Duration::seconds(-3)), "00:00:00");
    }
}
