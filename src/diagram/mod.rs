//! The fixed four-class PIIS domain model and its two renditions.
//!
//! [`uml_graph`] lays the classes out through Graphviz as record nodes;
//! [`sketch_scene`] places them by hand on a raster canvas.

mod raster;
mod sketch;
mod uml;

pub use raster::{load_font, rasterize, render_sketch, resolve_font, FALLBACK_FONTS};
pub use sketch::{sketch_scene, ClassBox, Line, Rgb, Scene, TextItem, TextSize};
pub use uml::uml_graph;

/// One class of the domain model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassSpec {
    /// ASCII node id
    pub id: &'static str,
    pub name: &'static str,
    pub attributes: &'static [&'static str],
    pub methods: &'static [&'static str],
}

/// A labelled association between two classes, by id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Relationship {
    pub from: &'static str,
    pub to: &'static str,
    pub label: &'static str,
}

pub const TITLE: &str = "PIIS - Informační a Řídicí Systém";

pub const CLASSES: [ClassSpec; 4] = [
    ClassSpec {
        id: "Uzivatel",
        name: "Uživatel",
        attributes: &["id: int", "jméno: string", "email: string"],
        methods: &["přihlásit()", "odhlásit()"],
    },
    ClassSpec {
        id: "System",
        name: "Systém",
        attributes: &["konfigurace: dict"],
        methods: &["inicializovat()", "spustit()", "zastavit()"],
    },
    ClassSpec {
        id: "Zaznam",
        name: "Záznam",
        attributes: &["id: int", "datum: datetime", "popis: string"],
        methods: &["vytvořit()", "aktualizovat()", "smazat()"],
    },
    ClassSpec {
        id: "Opravneni",
        name: "Oprávnění",
        attributes: &["úroveň: int"],
        methods: &["ověřit()", "nastavit()"],
    },
];

pub const RELATIONSHIPS: [Relationship; 4] = [
    Relationship {
        from: "Uzivatel",
        to: "Zaznam",
        label: "vytváří",
    },
    Relationship {
        from: "Uzivatel",
        to: "Opravneni",
        label: "má",
    },
    Relationship {
        from: "System",
        to: "Zaznam",
        label: "spravuje",
    },
    Relationship {
        from: "System",
        to: "Uzivatel",
        label: "řídí",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relationships_reference_known_classes() {
        for rel in RELATIONSHIPS {
            assert!(CLASSES.iter().any(|c| c.id == rel.from), "{}", rel.from);
            assert!(CLASSES.iter().any(|c| c.id == rel.to), "{}", rel.to);
        }
    }

    #[test]
    fn test_ids_are_ascii() {
        assert!(CLASSES.iter().all(|c| c.id.is_ascii()));
    }
}
