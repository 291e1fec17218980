//! Java source emitter for converted layers
//!
//! Renders a [`LayerModel`] as a `HumanoidModel` subclass whose
//! `createLayer()` rebuilds the tree with `addOrReplaceChild` calls.
//! Parents are declared before their children; children follow insertion
//! order. Numbers go through [`format_literal`].

mod options;
mod template;


use crate::base::{Cuboid, format_literal};
use crate::model::{CubeList, LayerModel, PartNode, PartPose};
pub use options::EmitOptions;
use template::{FOOTER_COMMENT, IMPORTS, RESERVED_VARIABLES, ROOT_VARIABLE, ZERO_POSE};

/// Render `layer` as the Java class `type_name`
pub fn emit(layer: &LayerModel, type_name: &str, options: &EmitOptions) -> String {
    let mut emitter = Emitter {
        options,
        out: String::new(),
    };
    emitter.document(layer, type_name);
    emitter.out
}

/// Render the declaration of one node and its subtree, as it appears
/// inside `createLayer`
pub fn emit_part(node: &PartNode, parent_variable: &str, options: &EmitOptions) -> String {
    let mut emitter = Emitter {
        options,
        out: String::new(),
    };
    emitter.part(node, parent_variable, false);
    emitter.out
}

struct Emitter<'o> {
    options: &'o EmitOptions,
    out: String,
}

impl Emitter<'_> {
    fn line(&mut self, level: usize, text: &str) {
        if !text.is_empty() {
            self.out.push_str(&self.options.indent(level));
            self.out.push_str(text);
        }
        self.out.push('\n');
    }

    fn document(&mut self, layer: &LayerModel, type_name: &str) {
        self.line(0, "");
        for import in IMPORTS {
            self.line(0, &format!("import {};", import));
        }
        self.line(0, "");
        self.line(
            0,
            &format!(
                "public class {}<T extends LivingEntity> extends HumanoidModel<T>",
                type_name
            ),
        );
        self.line(0, "{");
        self.line(0, "");
        self.line(1, &format!("public {}(ModelPart root) {{", type_name));
        self.line(2, "super(root);");
        self.line(1, "}");
        self.line(0, "");
        self.line(1, "public static LayerDefinition createLayer() {");
        self.line(2, "MeshDefinition definition = new MeshDefinition();");
        self.line(
            2,
            &format!("PartDefinition {} = definition.getRoot();", ROOT_VARIABLE),
        );
        self.line(0, "");

        for root in layer.roots.values() {
            self.part(&root.node, ROOT_VARIABLE, root.forced);
        }

        self.line(
            2,
            &format!(
                "return LayerDefinition.create(definition, {}, {});",
                layer.texture.width, layer.texture.height
            ),
        );
        self.line(1, "}");
        self.line(0, "");
        self.line(1, FOOTER_COMMENT);
        self.line(0, "}");
    }

    /// One declaration, then every child's declarations
    fn part(&mut self, node: &PartNode, parent_variable: &str, forced: bool) {
        if node.is_empty() && !forced {
            return;
        }

        let variable = variable_name(node.name());
        self.line(
            2,
            &format!(
                "PartDefinition {} = {}.addOrReplaceChild(\"{}\",",
                variable,
                parent_variable,
                node.name()
            ),
        );
        self.line(4, "CubeListBuilder.create()");
        if let Some(geometry) = node.geometry() {
            self.geometry(geometry);
        }
        self.line(4, &format!(", {});", pose(node.pose())));
        self.line(0, "");

        for child in node.children().values() {
            self.part(child, &variable, false);
        }
    }

    fn geometry(&mut self, geometry: &CubeList) {
        if geometry.mirror {
            self.line(6, ".mirror()");
        }
        self.line(
            6,
            &format!(
                ".texOffs({}, {})",
                format_literal(geometry.texture_offset.x),
                format_literal(geometry.texture_offset.y)
            ),
        );
        for cuboid in &geometry.boxes {
            self.line(6, &add_box(cuboid));
        }
    }
}

fn add_box(cuboid: &Cuboid) -> String {
    let mut args: Vec<String> = cuboid
        .offset
        .components()
        .into_iter()
        .chain(cuboid.size.components())
        .map(format_literal)
        .collect();
    if cuboid.inflate != 0.0 {
        args.push(format!(
            "new CubeDeformation({})",
            format_literal(cuboid.inflate)
        ));
    }
    format!(".addBox({})", args.join(", "))
}

fn pose(pose: PartPose) -> String {
    match pose {
        PartPose::Zero => ZERO_POSE.to_string(),
        PartPose::OffsetAndRotation { offset, rotation } => {
            let args: Vec<String> = offset
                .components()
                .into_iter()
                .chain(rotation.components())
                .map(format_literal)
                .collect();
            format!("PartPose.offsetAndRotation({})", args.join(", "))
        }
    }
}

/// Java local for a part; names that clash with the builder's own locals get a suffix
fn variable_name(name: &str) -> String {
    if RESERVED_VARIABLES.contains(&name) {
        format!("{}_part", name)
    } else {
        name.to_string()
    }
}
