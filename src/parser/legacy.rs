//! The legacy `ModelRenderer` call shapes.
//!
//! Capture positions per pattern:
//!
//! ```text
//! declaration     NAME, U, V
//! rotation_point  NAME, X, Y, Z
//! rotation_angle  NAME, X, Y, Z
//! mirror          NAME, BOOL
//! add_box         NAME, X, Y, Z, W, H, D, [SCALE]
//! add_child       PARENT, CHILD
//! texture_width   N
//! texture_height  N
//! ```

use super::lexer::TokenKind;
use super::pattern::{CaptureKind, Pattern, Step};

/// The full pattern set for one legacy source dialect.
///
/// Every field is plain data; a different dialect can build its own set
/// as long as the capture positions above are kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LegacyPatterns {
    pub declaration: Pattern,
    pub rotation_point: Pattern,
    pub rotation_angle: Pattern,
    pub mirror: Pattern,
    pub add_box: Pattern,
    pub add_child: Pattern,
    pub texture_width: Pattern,
    pub texture_height: Pattern,
}

impl LegacyPatterns {
    /// Patterns for `net.minecraft.client.model.ModelRenderer` era sources
    pub fn model_renderer() -> Self {
        Self {
            declaration: Pattern::new("declaration")
                .qualifier()
                .ident()
                .token(TokenKind::Eq)
                .token(TokenKind::NewKw)
                .word("ModelRenderer")
                .token(TokenKind::LParen)
                .token(TokenKind::ThisKw)
                .token(TokenKind::Comma)
                .numbers(2)
                .token(TokenKind::RParen)
                .token(TokenKind::Semicolon),
            rotation_point: member_call("rotation_point", "setRotationPoint").numbers(3).close_call(),
            rotation_angle: Pattern::new("rotation_angle")
                .qualifier()
                .word("setRotateAngle")
                .token(TokenKind::LParen)
                .qualifier()
                .ident()
                .token(TokenKind::Comma)
                .numbers(3)
                .close_call(),
            mirror: Pattern::new("mirror")
                .qualifier()
                .ident()
                .token(TokenKind::Dot)
                .word("mirror")
                .token(TokenKind::Eq)
                .boolean()
                .token(TokenKind::Semicolon),
            add_box: member_call("add_box", "addBox")
                .numbers(6)
                .optional(vec![
                    Step::Token(TokenKind::Comma),
                    Step::Capture(CaptureKind::Number),
                ])
                .close_call(),
            add_child: member_call("add_child", "addChild")
                .qualifier()
                .ident()
                .close_call(),
            texture_width: field_assignment("texture_width", "textureWidth"),
            texture_height: field_assignment("texture_height", "textureHeight"),
        }
    }

    /// Every pattern, in the order the graph builder applies them
    pub fn all(&self) -> [&Pattern; 8] {
        [
            &self.declaration,
            &self.rotation_angle,
            &self.add_box,
            &self.rotation_point,
            &self.mirror,
            &self.add_child,
            &self.texture_width,
            &self.texture_height,
        ]
    }
}

impl Default for LegacyPatterns {
    fn default() -> Self {
        Self::model_renderer()
    }
}

/// `[this.]NAME.method(`
fn member_call(name: &'static str, method: &'static str) -> Pattern {
    Pattern::new(name)
        .qualifier()
        .ident()
        .token(TokenKind::Dot)
        .word(method)
        .token(TokenKind::LParen)
}

/// `[this.]field = N;`
fn field_assignment(name: &'static str, field: &'static str) -> Pattern {
    Pattern::new(name)
        .qualifier()
        .word(field)
        .token(TokenKind::Eq)
        .number()
        .token(TokenKind::Semicolon)
}
