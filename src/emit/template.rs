//! Fixed parts of the generated document.

pub(super) const IMPORTS: &[&str] = &[
    "com.mojang.blaze3d.vertex.PoseStack",
    "com.mojang.blaze3d.vertex.VertexConsumer",
    "net.minecraft.client.model.HumanoidModel",
    "net.minecraft.client.model.geom.ModelLayerLocation",
    "net.minecraft.client.model.geom.ModelPart",
    "net.minecraft.client.model.geom.PartPose",
    "net.minecraft.client.model.geom.builders.*",
    "net.minecraft.resources.ResourceLocation",
    "net.minecraft.world.entity.LivingEntity",
];

/// Name of the mesh root inside `createLayer`
pub(super) const ROOT_VARIABLE: &str = "root";

/// Local names already taken inside `createLayer`
pub(super) const RESERVED_VARIABLES: &[&str] = &["root", "definition"];

pub(super) const ZERO_POSE: &str = "PartPose.ZERO";

pub(super) const FOOTER_COMMENT: &str =
    "// May need to implement the rendering parts depending on what you are doing";
