/// The closed set of cell materials. `Empty` doubles as the eraser when
/// selected as the active brush material.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum MaterialKind {
    Empty,
    Water,
    Sand,
    Dirt,
    Stone,
}

/// Which update rule the physics pass applies to a cell of a given kind.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum UpdateRule {
    Inert,
    Displacement,
    Flow,
}

impl MaterialKind {
    /// Selection order for the number keys, index 0 first.
    pub const PALETTE: [MaterialKind; 5] = [
        MaterialKind::Empty,
        MaterialKind::Water,
        MaterialKind::Sand,
        MaterialKind::Dirt,
        MaterialKind::Stone,
    ];

    pub fn is_empty(self) -> bool {
        matches!(self, MaterialKind::Empty)
    }

    /// Relative weight, compared with `>` only and never summed. A cell may
    /// displace a below-neighbor of strictly smaller weight.
    pub fn weight(self) -> u32 {
        match self {
            MaterialKind::Empty => 0,
            MaterialKind::Water => 1,
            MaterialKind::Sand => 5,
            MaterialKind::Dirt => 5,
            MaterialKind::Stone => 10,
        }
    }

    pub fn update_rule(self) -> UpdateRule {
        match self {
            MaterialKind::Water => UpdateRule::Flow,
            MaterialKind::Empty | MaterialKind::Stone => UpdateRule::Inert,
            MaterialKind::Sand | MaterialKind::Dirt => UpdateRule::Displacement,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn weights_match_the_fixed_table() {
        assert_eq!(MaterialKind::Empty.weight(), 0);
        assert_eq!(MaterialKind::Water.weight(), 1);
        assert_eq!(MaterialKind::Sand.weight(), 5);
        assert_eq!(MaterialKind::Dirt.weight(), 5);
        assert_eq!(MaterialKind::Stone.weight(), 10);
    }

    #[test]
    fn weight_order_empty_water_granular_stone() {
        assert!(MaterialKind::Empty.weight() < MaterialKind::Water.weight());
        assert!(MaterialKind::Water.weight() < MaterialKind::Sand.weight());
        assert_eq!(MaterialKind::Sand.weight(), MaterialKind::Dirt.weight());
        assert!(MaterialKind::Dirt.weight() < MaterialKind::Stone.weight());
    }

    #[test]
    fn every_kind_has_a_rule() {
        assert_eq!(MaterialKind::Empty.update_rule(), UpdateRule::Inert);
        assert_eq!(MaterialKind::Stone.update_rule(), UpdateRule::Inert);
        assert_eq!(MaterialKind::Water.update_rule(), UpdateRule::Flow);
        assert_eq!(MaterialKind::Sand.update_rule(), UpdateRule::Displacement);
        assert_eq!(MaterialKind::Dirt.update_rule(), UpdateRule::Displacement);
    }

    #[test]
    fn palette_starts_with_the_eraser() {
        assert!(MaterialKind::PALETTE[0].is_empty());
        assert_eq!(MaterialKind::PALETTE.len(), 5);
    }
}
