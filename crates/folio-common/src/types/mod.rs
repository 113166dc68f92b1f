mod core;

pub use self::core::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_edges_and_area() {
        let r = Rect::new(10.0, 20.0, 800.0, 600.0);
        assert_eq!(r.right(), 810.0);
        assert_eq!(r.bottom(), 620.0);
        assert_eq!(r.area(), 480_000.0);
    }

    #[test]
    fn rect_serialization() {
        let r = Rect::new(0.0, 0.0, 1920.0, 1080.0);
        let json = serde_json::to_string(&r).unwrap();
        let deserialized: Rect = serde_json::from_str(&json).unwrap();
        assert_eq!(r, deserialized);
    }

    #[test]
    fn tile_id_display_and_from() {
        let id = TileId::from("home-1");
        assert_eq!(id.to_string(), "home-1");
        assert_eq!(id, TileId::new(String::from("home-1")));
    }

    #[test]
    fn tile_id_serializes_as_plain_string() {
        let json = serde_json::to_string(&TileId::from("about-7")).unwrap();
        assert_eq!(json, "\"about-7\"");
    }

    #[test]
    fn tile_kind_parses_case_insensitively() {
        assert_eq!("Projects".parse::<TileKind>(), Ok(TileKind::Projects));
        assert_eq!(" home ".parse::<TileKind>(), Ok(TileKind::Home));
        assert!("desktop".parse::<TileKind>().is_err());
    }

    #[test]
    fn tile_kind_serde_is_lowercase() {
        let json = serde_json::to_string(&TileKind::Contact).unwrap();
        assert_eq!(json, "\"contact\"");
        for kind in TileKind::ALL {
            let json = serde_json::to_string(&kind).unwrap();
            let back: TileKind = serde_json::from_str(&json).unwrap();
            assert_eq!(kind, back);
        }
    }

    #[test]
    fn tile_kind_titles_are_capitalized() {
        assert_eq!(TileKind::Home.default_title(), "Home");
        assert_eq!(TileKind::Articles.default_title(), "Articles");
    }
}
