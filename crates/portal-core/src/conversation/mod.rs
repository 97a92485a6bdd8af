//! Conversation aggregation
//!
//! The message table is flat: there is no stored conversation entity. This
//! module derives per-counterpart threads from a user's full set of sent and
//! received rows. It is pure and storage-free so it can be unit tested
//! without a live backend; callers fetch rows however they like and hand
//! them in, in any order.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::entities::Message;
use crate::value_objects::Role;

/// Display name used when neither the user directory nor the message join
/// knows the counterpart
pub const UNKNOWN_COUNTERPART: &str = "Usuário";

/// A message row joined with the display name and role of both participants.
///
/// The joins are optional: the store may return rows whose counterpart
/// account has been deleted, and broadcast rows have no receiver at all.
#[derive(Debug, Clone)]
pub struct ThreadMessage {
    pub message: Message,
    pub sender_name: Option<String>,
    pub sender_role: Option<Role>,
    pub receiver_name: Option<String>,
    pub receiver_role: Option<Role>,
}

impl ThreadMessage {
    /// Name/role of the participant that is not `user_id`, as embedded in
    /// the join
    fn counterpart_join(&self, user_id: Uuid) -> (Option<&str>, Option<Role>) {
        if self.message.sender_id == user_id {
            (self.receiver_name.as_deref(), self.receiver_role)
        } else {
            (self.sender_name.as_deref(), self.sender_role)
        }
    }
}

/// A known counterpart from the user directory, preferred over the message
/// join when resolving display names
#[derive(Debug, Clone)]
pub struct CounterpartRef {
    pub id: Uuid,
    pub name: String,
    pub role: Role,
}

/// Derived two-party thread between the current user and one counterpart
#[derive(Debug, Clone)]
pub struct Conversation {
    pub counterpart_id: Uuid,
    pub counterpart_name: String,
    pub counterpart_role: Role,
    /// Ascending by `(created_at, id)`
    pub messages: Vec<Message>,
    pub last_message: Option<Message>,
    pub unread_count: usize,
}

impl Conversation {
    /// Thread with no history yet (counterpart picked from the directory,
    /// nothing sent). Rendered as "start the conversation", never an error.
    pub fn empty(counterpart: &CounterpartRef) -> Self {
        Self {
            counterpart_id: counterpart.id,
            counterpart_name: counterpart.name.clone(),
            counterpart_role: counterpart.role,
            messages: Vec::new(),
            last_message: None,
            unread_count: 0,
        }
    }

    /// Counterparts in staff roles are rendered as official support threads
    #[inline]
    pub fn is_support(&self) -> bool {
        self.counterpart_role.is_staff()
    }

    fn last_key(&self) -> Option<(DateTime<Utc>, Uuid)> {
        self.last_message.as_ref().map(|m| (m.created_at, m.id))
    }
}

/// Group a user's flat message rows into per-counterpart conversations.
///
/// - Broadcast/system rows (`receiver_id = NULL`) never form 1:1 threads and
///   are skipped.
/// - Display names resolve first against `directory`, then against the name
///   embedded in the message join (first-seen-wins across rows), then fall
///   back to [`UNKNOWN_COUNTERPART`].
/// - Messages within a thread sort ascending by `(created_at, id)`; the id
///   tie-break keeps equal timestamps deterministic.
/// - `last_message` is the row with the maximum `(created_at, id)` key, not
///   the last row in input order.
/// - `unread_count` counts rows addressed to `current_user` with
///   `read = false`.
///
/// The returned list is sorted descending by last-message timestamp; threads
/// without any message sort last.
pub fn group_conversations(
    current_user: Uuid,
    messages: Vec<ThreadMessage>,
    directory: &[CounterpartRef],
) -> Vec<Conversation> {
    let mut threads: HashMap<Uuid, Conversation> = HashMap::new();

    for row in messages {
        let Some(counterpart_id) = row.message.counterpart(current_user) else {
            continue;
        };

        let thread = threads.entry(counterpart_id).or_insert_with(|| {
            let known = directory.iter().find(|u| u.id == counterpart_id);
            let (join_name, join_role) = row.counterpart_join(current_user);

            let name = known
                .map(|u| u.name.clone())
                .or_else(|| join_name.map(str::to_string))
                .unwrap_or_else(|| UNKNOWN_COUNTERPART.to_string());
            let role = known
                .map(|u| u.role)
                .or(join_role)
                .unwrap_or(Role::Student);

            Conversation {
                counterpart_id,
                counterpart_name: name,
                counterpart_role: role,
                messages: Vec::new(),
                last_message: None,
                unread_count: 0,
            }
        });

        if row.message.is_unread_for(current_user) {
            thread.unread_count += 1;
        }
        thread.messages.push(row.message);
    }

    let mut conversations: Vec<Conversation> = threads.into_values().collect();
    for conversation in &mut conversations {
        conversation
            .messages
            .sort_by_key(|m| (m.created_at, m.id));
        conversation.last_message = conversation.messages.last().cloned();
    }

    // Newest thread first; empty threads (no last message) at the end
    conversations.sort_by(|a, b| match (a.last_key(), b.last_key()) {
        (Some(ka), Some(kb)) => kb.cmp(&ka),
        (Some(_), None) => std::cmp::Ordering::Less,
        (None, Some(_)) => std::cmp::Ordering::Greater,
        (None, None) => a.counterpart_id.cmp(&b.counterpart_id),
    });

    conversations
}
