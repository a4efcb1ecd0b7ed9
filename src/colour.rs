/// A colour, expressed in RGB or grey colour spaces
#[derive(Copy, Clone, PartialEq, Debug)]
pub enum Colour {
    /// DeviceRGB colour; r, g, b, range from 0.0 to 1.0
    RGB { r: f32, g: f32, b: f32 },
    /// DeviceGray colour; g ranges from 0.0 to 1.0
    Grey { g: f32 },
}

/// Colours used on the printed documents
pub mod colours {
    use super::*;

    /// Body text
    pub const INK: Colour = Colour::Grey { g: 0.0 };
    /// Running header and footer text
    pub const MUTED: Colour = Colour::Grey { g: 0.35 };
    /// Signature and separator rules
    pub const RULE: Colour = Colour::Grey { g: 0.2 };
    /// Document titles
    pub const INSTITUTIONAL: Colour = Colour::RGB {
        r: 0.05,
        g: 0.16,
        b: 0.36,
    };
}
