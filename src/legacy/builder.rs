//! Graph builder passes.
//!
//! Pass order is fixed: declarations first, then rotation angles, boxes,
//! rotation points, mirror flags and child attachments. Texture size is read
//! last and stored on the model, never on a part.

use smol_str::SmolStr;
use tracing::{debug, trace, warn};

use super::{MissingPolicy, MissingReference, OldModel, OldPart};
use crate::base::{Cuboid, Position2, TextureSize, Vector3, normalize, parse_numeric};
use crate::error::{ConvertError, Result};
use crate::parser::{LegacyPatterns, Match, Matches, Pattern, Token, significant_tokens};

/// Builds an [`OldModel`] from one source text.
pub struct GraphBuilder<'p> {
    patterns: &'p LegacyPatterns,
    policy: MissingPolicy,
}

impl<'p> GraphBuilder<'p> {
    pub fn new(patterns: &'p LegacyPatterns, policy: MissingPolicy) -> Self {
        Self { patterns, policy }
    }

    pub fn build(&self, source: &str) -> Result<OldModel> {
        let mut pass = Pass {
            source,
            tokens: significant_tokens(source),
            policy: self.policy,
            model: OldModel::default(),
        };
        let patterns = self.patterns;

        pass.declarations(&patterns.declaration)?;
        pass.rotation_angles(&patterns.rotation_angle)?;
        pass.boxes(&patterns.add_box)?;
        pass.rotation_points(&patterns.rotation_point)?;
        pass.mirrors(&patterns.mirror)?;
        pass.children(&patterns.add_child)?;
        pass.texture(&patterns.texture_width, &patterns.texture_height)?;

        debug!(
            "[BUILD] {} parts, {} roots, {} skipped references",
            pass.model.len(),
            pass.model.roots().count(),
            pass.model.diagnostics.len()
        );
        Ok(pass.model)
    }
}

/// State shared by the passes of one build
struct Pass<'s> {
    source: &'s str,
    tokens: Vec<Token<'s>>,
    policy: MissingPolicy,
    model: OldModel,
}

impl<'s> Pass<'s> {
    fn scan<'p>(&self, pattern: &'p Pattern) -> Matches<'p, 's> {
        pattern.matches_tokens(self.source, self.tokens.clone())
    }

    fn declarations(&mut self, pattern: &Pattern) -> Result<()> {
        for m in self.scan(pattern) {
            let name = SmolStr::new(normalize(m.text(0)));
            let offset = Position2::new(number(&m, 1)?, number(&m, 2)?);
            trace!("[BUILD] declare {} at texture offset {:?}", name, offset);
            // A repeated declaration starts over with a fresh record
            if self
                .model
                .parts
                .insert(name.clone(), OldPart::new(name.clone(), offset))
                .is_some()
            {
                debug!("[BUILD] {} declared again; earlier state discarded", name);
            }
        }
        Ok(())
    }

    fn rotation_angles(&mut self, pattern: &Pattern) -> Result<()> {
        for m in self.scan(pattern) {
            let angle = vector(&m, 1)?;
            if let Some(part) = self.lookup(&m, 0)? {
                part.rotation_angle = angle;
            }
        }
        Ok(())
    }

    fn boxes(&mut self, pattern: &Pattern) -> Result<()> {
        for m in self.scan(pattern) {
            let mut cuboid = Cuboid::new(vector(&m, 1)?, vector(&m, 4)?);
            if m.get(7).is_some() {
                cuboid = cuboid.with_inflate(number(&m, 7)?);
            }
            if let Some(part) = self.lookup(&m, 0)? {
                part.boxes.push(cuboid);
            }
        }
        Ok(())
    }

    fn rotation_points(&mut self, pattern: &Pattern) -> Result<()> {
        for m in self.scan(pattern) {
            let point = vector(&m, 1)?;
            if let Some(part) = self.lookup(&m, 0)? {
                part.rotation_point = point;
            }
        }
        Ok(())
    }

    fn mirrors(&mut self, pattern: &Pattern) -> Result<()> {
        for m in self.scan(pattern) {
            let mirror = m.text(1) == "true";
            if let Some(part) = self.lookup(&m, 0)? {
                part.mirror = mirror;
            }
        }
        Ok(())
    }

    fn children(&mut self, pattern: &Pattern) -> Result<()> {
        for m in self.scan(pattern) {
            let parent = SmolStr::new(normalize(m.text(0)));
            let child = SmolStr::new(normalize(m.text(1)));

            // Check both ends before touching either record
            let mut complete = true;
            for name in [&parent, &child] {
                if !self.model.contains(name) {
                    self.missing(name.clone(), &m)?;
                    complete = false;
                }
            }
            if !complete {
                continue;
            }

            trace!("[BUILD] attach {} -> {}", parent, child);
            if let Some(record) = self.model.parts.get_mut(&child) {
                record.has_parent = true;
            }
            if let Some(record) = self.model.parts.get_mut(&parent) {
                record.children.push(child);
            }
        }
        Ok(())
    }

    fn texture(&mut self, width: &Pattern, height: &Pattern) -> Result<()> {
        let mut texture = TextureSize::default();
        for m in self.scan(width) {
            texture.width = dimension(&m)?;
        }
        for m in self.scan(height) {
            texture.height = dimension(&m)?;
        }
        self.model.texture = texture;
        Ok(())
    }

    /// Find the record named by capture `index`, applying the missing policy
    fn lookup(&mut self, m: &Match<'_>, index: usize) -> Result<Option<&mut OldPart>> {
        let name = SmolStr::new(normalize(m.text(index)));
        if !self.model.contains(&name) {
            self.missing(name, m)?;
            return Ok(None);
        }
        Ok(self.model.parts.get_mut(&name))
    }

    fn missing(&mut self, name: SmolStr, m: &Match<'_>) -> Result<()> {
        match self.policy {
            MissingPolicy::Strict => Err(ConvertError::missing_reference(name, m.pattern, m.range)),
            MissingPolicy::Ignore => {
                let reference = MissingReference {
                    pattern: m.pattern,
                    name,
                    range: m.range,
                };
                warn!("[BUILD] skipping {}", reference);
                self.model.diagnostics.push(reference);
                Ok(())
            }
        }
    }
}

fn number(m: &Match<'_>, index: usize) -> Result<f64> {
    let text = m.text(index);
    parse_numeric(text).ok_or_else(|| {
        let range = m.get(index).map(|c| c.range).unwrap_or(m.range);
        ConvertError::malformed_number(text, m.pattern, range)
    })
}

/// Three numbers starting at capture `first`
fn vector(m: &Match<'_>, first: usize) -> Result<Vector3> {
    Ok(Vector3::new(
        number(m, first)?,
        number(m, first + 1)?,
        number(m, first + 2)?,
    ))
}

/// A texture edge must be a whole, non-negative pixel count
fn dimension(m: &Match<'_>) -> Result<u32> {
    let value = number(m, 0)?;
    if value.fract() != 0.0 || value < 0.0 || value > f64::from(u32::MAX) {
        return Err(ConvertError::malformed_number(m.text(0), m.pattern, m.range));
    }
    Ok(value as u32)
}
