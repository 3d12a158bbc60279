//! DTOs for the full plan endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::api::dto::cut_list::{CutDimensionItem, to_items};
use crate::application::services::{BoxPlan, ReferenceLink};
use crate::domain::entities::{DimensionSet, GiftForm, Material, ShapeKind};

/// Request for a full plan: the form snapshot plus selected criteria.
#[derive(Debug, Deserialize, Validate)]
pub struct PlanRequest {
    #[serde(default)]
    #[validate(nested)]
    pub form: GiftFormInput,

    #[serde(default)]
    #[validate(length(max = 32))]
    pub criteria: Vec<String>,
}

/// Form fields as submitted by a client.
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(default)]
pub struct GiftFormInput {
    #[validate(length(max = 200))]
    pub name: String,

    #[validate(length(max = 100))]
    pub preset: String,

    #[validate(length(max = 100))]
    pub occasion: String,

    pub shape: ShapeKind,
    pub dimensions: DimensionSet,
}

impl From<GiftFormInput> for GiftForm {
    fn from(input: GiftFormInput) -> Self {
        GiftForm {
            name: input.name,
            preset: input.preset,
            occasion: input.occasion,
            shape: input.shape,
            dimensions: input.dimensions,
        }
    }
}

/// Full plan for the submitted form.
#[derive(Debug, Serialize)]
pub struct PlanResponse {
    pub name: String,
    pub preset: String,
    pub occasion: String,
    pub shape: ShapeKind,
    pub shape_name: String,
    pub cut_list: Vec<CutDimensionItem>,
    pub lid_list: Option<Vec<CutDimensionItem>>,
    pub references: Vec<ReferenceLink>,
    pub materials: Vec<Material>,
}

impl From<BoxPlan> for PlanResponse {
    fn from(plan: BoxPlan) -> Self {
        Self {
            cut_list: to_items(&plan.cut_list),
            lid_list: plan.lid_list.as_deref().map(to_items),
            name: plan.name,
            preset: plan.preset,
            occasion: plan.occasion,
            shape: plan.shape,
            shape_name: plan.shape_name,
            references: plan.references,
            materials: plan.materials,
        }
    }
}
