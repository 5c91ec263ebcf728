//! View models for the two admin screens.
//!
//! Each renderer is a pure function from a representation to a view value,
//! rebuilt in full on every call. Anything the view needs but the
//! representation does not offer surfaces as a typed hypermedia error.

use serde::Serialize;

use super::form::FormView;
use crate::Result;
use crate::mason::{Player, PlayerCollection, relations};

/// Fixed header row of the players table.
pub const LIST_HEADERS: [&str; 4] = ["Name", "Model", "Location", "Actions"];

/// One row of the players table.
#[derive(Debug, Clone, Serialize)]
pub struct PlayerRow {
    pub name: String,
    /// Href of the row's `self` control (the "show" link target).
    pub show_href: String,
}

/// The collection screen: table rows plus the add-player form.
#[derive(Debug, Clone, Serialize)]
pub struct ListView {
    pub rows: Vec<PlayerRow>,
    pub add_form: FormView,
}

impl ListView {
    /// Render the collection representation.
    ///
    /// Produces exactly one row per item, each wired to the item's `self`
    /// control, and builds the add form from the `BGT:add-player` control.
    pub fn from_collection(collection: &PlayerCollection) -> Result<Self> {
        let rows = collection
            .items
            .iter()
            .map(|item| {
                Ok(PlayerRow {
                    name: item.name.clone(),
                    show_href: item.controls.get(relations::SELF)?.href.clone(),
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let add_form =
            FormView::from_control(collection.controls.get(relations::ADD_PLAYER)?)?;

        Ok(Self { rows, add_form })
    }

    /// The fixed table headers.
    pub fn headers(&self) -> &'static [&'static str] {
        &LIST_HEADERS
    }
}

/// The single-item screen: breadcrumb back to the collection plus the edit
/// form.
#[derive(Debug, Clone, Serialize)]
pub struct DetailView {
    /// Href of the `collection` control (the breadcrumb target).
    pub breadcrumb: String,
    pub form: FormView,
}

impl DetailView {
    /// Render one player's representation.
    ///
    /// Builds the edit form from the `edit` control, prefills `name` from
    /// the item, and appends a read-only `location` field.
    pub fn from_player(player: &Player) -> Result<Self> {
        let breadcrumb = player.controls.get(relations::COLLECTION)?.href.clone();

        let mut form = FormView::from_control(player.controls.get(relations::EDIT)?)?;
        form.prefill("name", &player.name);
        form.push_readonly(
            "location",
            "Location",
            player.location.as_deref().unwrap_or_default(),
        );

        Ok(Self { breadcrumb, form })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Error, HypermediaError};
    use serde_json::json;

    fn collection_with(names: &[&str]) -> PlayerCollection {
        let items: Vec<serde_json::Value> = names
            .iter()
            .map(|name| {
                json!({
                    "name": name,
                    "@controls": {"self": {"href": format!("/api/players/{name}/")}}
                })
            })
            .collect();

        serde_json::from_value(json!({
            "items": items,
            "@controls": {
                "self": {"href": "/api/players/"},
                "BGT:add-player": {
                    "href": "/api/players/",
                    "method": "POST",
                    "encoding": "json",
                    "schema": {
                        "type": "object",
                        "properties": {"name": {"description": "Player's name"}},
                        "required": ["name"]
                    }
                }
            }
        }))
        .unwrap()
    }

    fn sample_player() -> Player {
        serde_json::from_value(json!({
            "name": "Ada",
            "location": "Oulu",
            "@controls": {
                "self": {"href": "/api/players/Ada/"},
                "collection": {"href": "/api/players/"},
                "edit": {
                    "href": "/api/players/Ada/",
                    "method": "PUT",
                    "encoding": "json",
                    "schema": {
                        "type": "object",
                        "properties": {"name": {"description": "Player's name"}},
                        "required": ["name"]
                    }
                }
            }
        }))
        .unwrap()
    }

    #[test]
    fn list_view_has_one_row_per_item() {
        let collection = collection_with(&["Ada", "Grace", "Edsger"]);
        let view = ListView::from_collection(&collection).unwrap();

        assert_eq!(view.rows.len(), 3);
        assert_eq!(view.rows[0].name, "Ada");
        assert_eq!(view.rows[0].show_href, "/api/players/Ada/");
        assert_eq!(view.headers(), ["Name", "Model", "Location", "Actions"]);
    }

    #[test]
    fn empty_collection_renders_zero_rows() {
        let view = ListView::from_collection(&collection_with(&[])).unwrap();
        assert!(view.rows.is_empty());
        assert_eq!(view.add_form.method, "POST");
    }

    #[test]
    fn missing_add_control_is_recoverable() {
        let collection: PlayerCollection = serde_json::from_value(json!({
            "items": [],
            "@controls": {"self": {"href": "/api/players/"}}
        }))
        .unwrap();

        let err = ListView::from_collection(&collection).unwrap_err();
        assert!(matches!(
            err,
            Error::Hypermedia(HypermediaError::MissingControl { ref relation })
                if relation == relations::ADD_PLAYER
        ));
    }

    #[test]
    fn detail_view_prefills_name_and_appends_readonly_location() {
        let view = DetailView::from_player(&sample_player()).unwrap();

        assert_eq!(view.breadcrumb, "/api/players/");
        assert_eq!(view.form.method, "PUT");
        assert_eq!(view.form.field("name").unwrap().value, "Ada");

        let location = view.form.field("location").unwrap();
        assert!(location.readonly);
        assert_eq!(location.value, "Oulu");
    }

    #[test]
    fn detail_view_requires_edit_control() {
        let player: Player = serde_json::from_value(json!({
            "name": "Ada",
            "@controls": {"collection": {"href": "/api/players/"}}
        }))
        .unwrap();

        assert!(DetailView::from_player(&player).is_err());
    }
}
