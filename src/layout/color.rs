use indexmap::IndexMap;
use tracing::warn;

use crate::core::place::Place;

/// Fallback stroke when a place type has no configured color.
pub const FALLBACK_COLOR: &str = "#000000";

/// Deterministic palette cycled over unique place names.
pub const NAME_PALETTE: [&str; 14] = [
    "#067BC2", "#8A33FF", "#84DD63", "#684756", "#FB4D3D", "#5ABCB9", "#9D9171", "#FF3366",
    "#26532B", "#D56062", "#3D314A", "#399E5A", "#5D675B", "#2EC4B6",
];

/// Curated place-type color table of the source dataset.
#[must_use]
pub fn place_type_colors() -> IndexMap<String, String> {
    [
        ("Home", "#009673"),
        ("Groupe de soutien", "#067BC2"),
        ("Crèche", "#84DD63"),
        ("Sanatorium", "#684756"),
        ("Atelier protégé", "#FB4D3D"),
        ("Maison d'accueil", "#5ABCB9"),
        ("Hôpital général (département)", "#9D9171"),
        ("Hôpital psychiatrique", "#FF3366"),
        ("Institut médico-pédagogique", "#26532B"),
        ("Centre psychiatrique extra-hospitalier", "#D56062"),
        ("Service social", "#3D314A"),
        ("Centre de revalidation", "#5998C5"),
        ("Ecole spécialisé", "#A8E55C"),
        ("Hôpital général", "#BFAE8E"),
        ("Annexe psychiatrique de Prison", "#B03A48"),
        ("Prison", "#2F2F2F"),
        ("Colonie", "#AD7B5C"),
        ("Orphelinat", "#A3D977"),
        ("Hospice pour enfants", "#95D16F"),
        ("Dépôt de mendicité", "#7C6F5A"),
        ("Etablissement de défense sociale", "#5E3A39"),
        ("établissements d’observation", "#B7DD8C"),
        ("Couvent", "#6A5A99"),
        ("Centre médico-chirurgical", "#4FA1C2"),
        ("Centre gériatrique", "#D3B88C"),
        ("Maisons de soins psychiatriques", "#E2727E"),
        ("Maison de refuge", "#4C6773"),
        ("Polyclinique", "#5CBCD4"),
        ("Organisme de tutelle", "#4D4069"),
        ("Maison de retraite", "#D8C3A5"),
        ("Camp de concentration", "#1C1C1C"),
        ("Médecin", "#3C9DC6"),
        ("Médecin traitant", "#3C9DC6"),
        ("Hôpital psychiatrique (département)", "#E04C6A"),
        ("psychiatre", "#D7435F"),
        ("Medecin-directeur de l'EDS de Tournai", "#3798A6"),
        ("Assistante sociale", "#4A3A5E"),
        ("Médecin généraliste", "#56A3B5"),
    ]
    .into_iter()
    .map(|(place_type, color)| (place_type.to_owned(), color.to_owned()))
    .collect()
}

/// Read-only color lookup injected into the layout passes.
///
/// Two mappings live here: an explicit place-type table, and a palette
/// assignment over unique place names in first-seen order. Both are frozen at
/// construction; the passes never mutate shared color state.
#[derive(Debug, Clone, Default)]
pub struct ColorResolver {
    by_type: IndexMap<String, String>,
    by_name: IndexMap<String, String>,
}

impl ColorResolver {
    #[must_use]
    pub fn new(by_type: IndexMap<String, String>) -> Self {
        Self {
            by_type,
            by_name: IndexMap::new(),
        }
    }

    /// Assigns palette colors to names in iteration order, cycling when the
    /// palette runs out. Already-assigned names keep their color.
    #[must_use]
    pub fn with_palette_names<'a>(mut self, names: impl IntoIterator<Item = &'a str>) -> Self {
        for name in names {
            if self.by_name.contains_key(name) {
                continue;
            }
            let color = NAME_PALETTE[self.by_name.len() % NAME_PALETTE.len()];
            self.by_name.insert(name.to_owned(), color.to_owned());
        }
        self
    }

    /// Color keyed by the place's type, black when unmapped.
    #[must_use]
    pub fn for_place_type(&self, place: &Place) -> &str {
        match self.by_type.get(place.place_type.trim()) {
            Some(color) => color,
            None => {
                warn!(
                    place_id = %place.id,
                    place_type = %place.place_type,
                    "no color configured for place type"
                );
                FALLBACK_COLOR
            }
        }
    }

    /// Palette color keyed by place name, black when the name was never seen.
    #[must_use]
    pub fn for_place_name(&self, name: &str) -> &str {
        self.by_name
            .get(name)
            .map_or(FALLBACK_COLOR, String::as_str)
    }
}
