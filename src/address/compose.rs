//! Rendering of [`ResourceAddress`] values to the service's path syntax.
//!
//! Composition is the most directly testable unit of the SDK: a pure
//! function from an address value to a path string, performed entirely
//! before any network activity so malformed addresses fail fast.
//!
//! # Rendering Rules
//!
//! For each segment, in order:
//!
//! 1. the base: `{kind}` (keyless), `{kind}/{key}` (one key), or
//!    `{kinds};{kind}_keys={k1},{k2}` (several keys)
//! 2. `;{filter}={value}` pairs, sorted by filter name
//! 3. `;out={s1},{s2}` listing sibling selectors in the order supplied
//!
//! Chained segments are appended with `/` and rendered recursively by the
//! same rules.

use super::{ResourceAddress, Scope};
use thiserror::Error;

/// Errors raised while rendering a [`ResourceAddress`].
///
/// Address errors are local-only: they are reported before any request is
/// composed or sent.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AddressError {
    /// An `out` selector is not a bare sub-resource.
    ///
    /// The service accepts no parameters on `out` sub-resources and no
    /// chaining beneath them, so a selector carrying its own chain, keys,
    /// filters, or nested selectors is rejected rather than silently
    /// truncated.
    #[error("out selector '{selector}' cannot carry chained sub-resources or parameters")]
    InvalidChaining {
        /// The collection name of the offending selector.
        selector: String,
    },
}

/// Renders an address to the remote path syntax.
pub(super) fn compose(address: &ResourceAddress) -> Result<String, AddressError> {
    let mut path = String::new();
    write_segment(address, &mut path)?;
    Ok(path)
}

fn write_segment(segment: &ResourceAddress, path: &mut String) -> Result<(), AddressError> {
    // Validate out selectors before rendering anything of this segment
    for selector in segment.out_selectors() {
        if !is_bare_selector(selector) {
            return Err(AddressError::InvalidChaining {
                selector: selector.kind().collection().to_string(),
            });
        }
    }

    match segment.scope() {
        Scope::Collection => path.push_str(segment.kind().collection()),
        Scope::Resource(key) => {
            path.push_str(segment.kind().singular());
            path.push('/');
            path.push_str(key);
        }
        Scope::Keys(keys) => {
            path.push_str(segment.kind().collection());
            path.push(';');
            path.push_str(segment.kind().key_param());
            path.push('=');
            path.push_str(&keys.join(","));
        }
    }

    // BTreeMap iteration gives the sorted, deterministic filter order
    for (name, value) in segment.filters() {
        path.push(';');
        path.push_str(name);
        path.push('=');
        path.push_str(value);
    }

    if !segment.out_selectors().is_empty() {
        path.push_str(";out=");
        let names: Vec<&str> = segment
            .out_selectors()
            .iter()
            .map(|s| s.kind().collection())
            .collect();
        path.push_str(&names.join(","));
    }

    for child in segment.chain() {
        path.push('/');
        write_segment(child, path)?;
    }

    Ok(())
}

/// An out selector may name a sub-resource and nothing else.
fn is_bare_selector(selector: &ResourceAddress) -> bool {
    matches!(selector.scope(), Scope::Collection)
        && selector.filters().is_empty()
        && selector.chain().is_empty()
        && selector.out_selectors().is_empty()
}

#[cfg(test)]
mod tests {
    use super::super::ResourceKind;
    use super::*;

    #[test]
    fn test_compose_keyless_collection() {
        let address = ResourceAddress::collection(ResourceKind::Game);
        assert_eq!(address.compose().unwrap(), "games");
    }

    #[test]
    fn test_compose_single_resource() {
        let address = ResourceAddress::resource(ResourceKind::Game, "nfl");
        assert_eq!(address.compose().unwrap(), "game/nfl");
    }

    #[test]
    fn test_compose_resource_with_sub_resource() {
        let address = ResourceAddress::resource(ResourceKind::League, "223.l.431")
            .sub(ResourceAddress::collection(ResourceKind::Standings));

        assert_eq!(address.compose().unwrap(), "league/223.l.431/standings");
    }

    #[test]
    fn test_compose_filters_sorted_lexically() {
        let address = ResourceAddress::collection(ResourceKind::Player)
            .filter("status", "A")
            .filter("position", "QB");

        assert_eq!(address.compose().unwrap(), "players;position=QB;status=A");
    }

    #[test]
    fn test_compose_is_deterministic_across_insertion_orders() {
        let first = ResourceAddress::collection(ResourceKind::Player)
            .filter("status", "A")
            .filter("position", "QB");
        let second = ResourceAddress::collection(ResourceKind::Player)
            .filter("position", "QB")
            .filter("status", "A");

        assert_eq!(first.compose().unwrap(), second.compose().unwrap());
    }

    #[test]
    fn test_compose_repeated_calls_identical() {
        let address = ResourceAddress::resource(ResourceKind::Team, "223.l.431.t.1")
            .sub(ResourceAddress::collection(ResourceKind::Roster).filter("week", "10"));

        let once = address.compose().unwrap();
        let twice = address.compose().unwrap();
        assert_eq!(once, twice);
        assert_eq!(once, "team/223.l.431.t.1/roster;week=10");
    }

    #[test]
    fn test_compose_multi_key_collection_form() {
        let address = ResourceAddress::collection_of(
            ResourceKind::Transaction,
            ["223.l.431.tr.26", "223.l.431.tr.27"],
        );

        assert_eq!(
            address.compose().unwrap(),
            "transactions;transaction_keys=223.l.431.tr.26,223.l.431.tr.27"
        );
    }

    #[test]
    fn test_compose_collection_chained_to_collection() {
        // "teams across the selected leagues"
        let address = ResourceAddress::collection(ResourceKind::League)
            .sub(ResourceAddress::collection(ResourceKind::Team));

        assert_eq!(address.compose().unwrap(), "leagues/teams");
    }

    #[test]
    fn test_compose_out_selectors_in_supplied_order() {
        let address = ResourceAddress::resource(ResourceKind::League, "223.l.431")
            .out(ResourceAddress::collection(ResourceKind::Settings))
            .out(ResourceAddress::collection(ResourceKind::Standings));

        assert_eq!(
            address.compose().unwrap(),
            "league/223.l.431;out=settings,standings"
        );
    }

    #[test]
    fn test_compose_filters_render_before_out() {
        let address = ResourceAddress::collection(ResourceKind::Transaction)
            .filter("team_key", "257.l.193.t.1")
            .out(ResourceAddress::collection(ResourceKind::Player));

        assert_eq!(
            address.compose().unwrap(),
            "transactions;team_key=257.l.193.t.1;out=players"
        );
    }

    #[test]
    fn test_out_selector_with_chain_is_invalid() {
        let chained_selector = ResourceAddress::collection(ResourceKind::Team)
            .sub(ResourceAddress::collection(ResourceKind::Roster));
        let address =
            ResourceAddress::resource(ResourceKind::League, "223.l.431").out(chained_selector);

        assert_eq!(
            address.compose(),
            Err(AddressError::InvalidChaining {
                selector: "teams".to_string()
            })
        );
    }

    #[test]
    fn test_out_selector_with_filters_is_invalid() {
        let filtered_selector =
            ResourceAddress::collection(ResourceKind::Player).filter("status", "A");
        let address =
            ResourceAddress::resource(ResourceKind::League, "223.l.431").out(filtered_selector);

        assert!(matches!(
            address.compose(),
            Err(AddressError::InvalidChaining { .. })
        ));
    }

    #[test]
    fn test_out_selector_with_keys_is_invalid() {
        let keyed_selector =
            ResourceAddress::collection_of(ResourceKind::Team, ["223.l.431.t.1"]);
        let address =
            ResourceAddress::resource(ResourceKind::League, "223.l.431").out(keyed_selector);

        assert!(matches!(
            address.compose(),
            Err(AddressError::InvalidChaining { .. })
        ));
    }

    #[test]
    fn test_invalid_out_selector_deep_in_chain_is_caught() {
        let bad_tail = ResourceAddress::collection(ResourceKind::Team).out(
            ResourceAddress::collection(ResourceKind::Roster)
                .sub(ResourceAddress::collection(ResourceKind::Player)),
        );
        let address = ResourceAddress::resource(ResourceKind::League, "223.l.431").sub(bad_tail);

        assert!(matches!(
            address.compose(),
            Err(AddressError::InvalidChaining { .. })
        ));
    }

    #[test]
    fn test_compose_users_collection_with_login_filter() {
        let address = ResourceAddress::collection(ResourceKind::User)
            .filter("use_login", "1")
            .sub(ResourceAddress::collection(ResourceKind::Game));

        assert_eq!(address.compose().unwrap(), "users;use_login=1/games");
    }

    #[test]
    fn test_compose_deep_chain_with_keys_and_filters() {
        let address = ResourceAddress::collection(ResourceKind::User)
            .filter("use_login", "1")
            .sub(ResourceAddress::collection_of(ResourceKind::Game, ["223"]))
            .sub(ResourceAddress::collection(ResourceKind::League));

        assert_eq!(
            address.compose().unwrap(),
            "users;use_login=1/games;game_keys=223/leagues"
        );
    }

    #[test]
    fn test_address_error_message_names_selector() {
        let error = AddressError::InvalidChaining {
            selector: "teams".to_string(),
        };
        assert!(error.to_string().contains("teams"));
        assert!(error.to_string().contains("out selector"));
    }
}
