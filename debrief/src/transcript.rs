//! Prior-game transcript and final-guess candidates.
//!
//! The transcript is whatever the game left behind in client storage:
//! every field is optional and absent data degrades to empty lists,
//! never to an error.

use indexmap::IndexMap;
use serde::Deserialize;

/// Sentinel candidate offered when no player name can be recovered,
/// so the accusation widget always has at least one option.
pub const UNKNOWN_CANDIDATE: &str = "Unknown";

/// The cached end-of-game state, as serialized by the game client.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GameTranscript {
    /// Player name -> generated self-description. Values may be null.
    pub descriptions: IndexMap<String, Option<String>>,
    pub public_state: PublicState,
    pub private_state: PrivateState,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PublicState {
    pub turn: TurnState,
    pub players: Vec<PlayerRecord>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct TurnState {
    /// Canonical turn order of player names.
    pub order: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct PlayerRecord {
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PrivateState {
    /// The respondent's own in-game name.
    pub my_name: Option<String>,
}

/// One reviewable description shown above the accusation choice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DescriptionEntry {
    pub name: String,
    /// Empty when no description was recorded for this player.
    pub text: String,
}

/// The derived context for the terminal final-guess question.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FinalGuessContext {
    /// Descriptions to review, in turn order with map-order extras appended.
    pub entries: Vec<DescriptionEntry>,

    /// Selectable accusation targets. Never empty; never contains the
    /// respondent.
    pub player_options: Vec<String>,

    /// The respondent's own name, when known.
    pub my_name: Option<String>,

    /// Whether any entry carries non-blank text. Drives a UI caveat only.
    pub has_descriptions: bool,
}

impl FinalGuessContext {
    /// Build the candidate set from the live transcript and the cached
    /// fallback description map.
    ///
    /// The fallback map is used alone when the live transcript has no
    /// non-empty description; otherwise the two are merged with live
    /// values winning per key. Names are de-duplicated, and the
    /// respondent is excluded from the options at every fallback tier.
    pub fn build(
        transcript: Option<&GameTranscript>,
        fallback: Option<&IndexMap<String, String>>,
    ) -> Self {
        let live = transcript.map(|t| &t.descriptions);
        let has_live = live.is_some_and(|descriptions| {
            descriptions
                .values()
                .any(|text| !text.as_deref().unwrap_or("").trim().is_empty())
        });

        let mut descriptions: IndexMap<String, String> = IndexMap::new();
        if has_live {
            if let Some(fallback) = fallback {
                for (name, text) in fallback {
                    descriptions.insert(name.clone(), text.clone());
                }
            }
            if let Some(live) = live {
                for (name, text) in live {
                    descriptions.insert(name.clone(), text.clone().unwrap_or_default());
                }
            }
        } else if let Some(fallback) = fallback {
            descriptions = fallback.clone();
        }

        let order: Vec<String> = transcript
            .map(|t| t.public_state.turn.order.clone())
            .unwrap_or_default();
        let players: Vec<String> = transcript
            .map(|t| {
                t.public_state
                    .players
                    .iter()
                    .map(|p| p.name.clone())
                    .collect()
            })
            .unwrap_or_default();
        let my_name = transcript.and_then(|t| t.private_state.my_name.clone());
        let is_me = |name: &str| my_name.as_deref() == Some(name);

        let ordered_names = if order.is_empty() { &players } else { &order };

        let mut seen: Vec<&str> = Vec::new();
        let mut entries = Vec::new();
        for name in ordered_names.iter().filter(|name| !is_me(name)) {
            if seen.contains(&name.as_str()) {
                continue;
            }
            seen.push(name);
            entries.push(DescriptionEntry {
                name: name.clone(),
                text: descriptions.get(name).cloned().unwrap_or_default(),
            });
        }
        for (name, text) in &descriptions {
            if is_me(name) || seen.contains(&name.as_str()) {
                continue;
            }
            seen.push(name);
            entries.push(DescriptionEntry {
                name: name.clone(),
                text: text.clone(),
            });
        }

        // Accusation targets, tier by tier: turn order, player records,
        // description keys, sentinel.
        let mut player_options = dedup_names(ordered_names.iter().filter(|name| !is_me(name)));
        if player_options.is_empty() {
            player_options = dedup_names(players.iter().filter(|name| !is_me(name)));
        }
        if player_options.is_empty() {
            player_options = dedup_names(descriptions.keys().filter(|name| !is_me(name)));
        }
        if player_options.is_empty() {
            player_options = vec![UNKNOWN_CANDIDATE.to_string()];
        }

        let has_descriptions = entries.iter().any(|entry| !entry.text.trim().is_empty());

        Self {
            entries,
            player_options,
            my_name,
            has_descriptions,
        }
    }
}

fn dedup_names<'a>(names: impl Iterator<Item = &'a String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for name in names {
        if !out.iter().any(|existing| existing == name) {
            out.push(name.clone());
        }
    }
    out
}
