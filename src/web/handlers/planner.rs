//! Planner page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{Query, State};
use axum::response::IntoResponse;
use url::form_urlencoded;

use crate::application::services::{LID_CLEARANCE_MM, ReferenceLink};
use crate::domain::Catalog;
use crate::domain::entities::{
    CutDimension, DimensionField, GiftForm, Material, SelectedCriteria,
};
use crate::state::AppState;

/// A `<select>` option.
pub struct OptionItem {
    pub value: String,
    pub label: String,
    pub selected: bool,
}

/// A numeric input for one dimension of the active shape.
pub struct DimensionInput {
    pub name: &'static str,
    pub label: &'static str,
    pub value: String,
}

/// A criterion toggle button; `href` reloads the page with the criterion
/// flipped and every other field kept.
pub struct CriterionToggle {
    pub id: String,
    pub label: String,
    pub selected: bool,
    pub href: String,
}

/// Template for the planner page.
///
/// Renders `templates/planner.html` with:
/// - Gift details and shape selection
/// - Dimension inputs for the active shape
/// - Criterion toggles
/// - Reference search links, cut lists and the materials checklist
#[derive(Template, WebTemplate)]
#[template(path = "planner.html")]
pub struct PlannerTemplate {
    pub name: String,
    pub shapes: Vec<OptionItem>,
    pub presets: Vec<OptionItem>,
    pub occasions: Vec<OptionItem>,
    pub dimensions: Vec<DimensionInput>,
    pub criteria: Vec<CriterionToggle>,
    pub selected_criteria: Vec<String>,
    pub cut_list: Vec<String>,
    pub lid_list: Option<Vec<String>>,
    pub clearance: f64,
    pub references: Vec<ReferenceLink>,
    pub materials: Vec<Material>,
}

/// Renders the planner page.
///
/// # Endpoint
///
/// `GET /`
///
/// # Query Parameters
///
/// All optional: `name`, `preset`, `occasion`, `shape`, one parameter per
/// dimension field (`length`, `baseEdge1`, ...), and `criteria` repeated once
/// per selected criterion. Values that do not parse keep their defaults.
///
/// # Template
///
/// Uses `templates/planner.html` for server-side rendering.
pub async fn planner_handler(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> impl IntoResponse {
    let (form, selected) = read_form(&state.catalog, pairs);
    let plan = state.plan_service.plan(&form, &selected);

    let shapes = state
        .catalog
        .shapes
        .iter()
        .map(|s| OptionItem {
            value: s.shape.to_string(),
            label: s.name.clone(),
            selected: s.shape == form.shape,
        })
        .collect();

    let dimensions = plan
        .cut_list
        .iter()
        .map(|cut| DimensionInput {
            name: cut.field.as_str(),
            label: cut.field.display_label(),
            value: cut.millimeters.to_string(),
        })
        .collect();

    let criteria = state
        .catalog
        .criteria
        .iter()
        .map(|c| {
            let mut toggled = selected.clone();
            toggled.toggle(&c.id);
            CriterionToggle {
                id: c.id.clone(),
                label: c.label.clone(),
                selected: selected.contains(&c.id),
                href: planner_href(&form, &toggled),
            }
        })
        .collect();

    PlannerTemplate {
        name: form.name.clone(),
        shapes,
        presets: options(&state.catalog.presets, &form.preset),
        occasions: options(&state.catalog.occasions, &form.occasion),
        dimensions,
        criteria,
        selected_criteria: selected.iter().map(String::from).collect(),
        cut_list: display_lines(&plan.cut_list),
        lid_list: plan.lid_list.as_deref().map(display_lines),
        clearance: LID_CLEARANCE_MM,
        references: plan.references,
        materials: plan.materials,
    }
}

/// Builds the form snapshot from query pairs, starting from the catalog
/// defaults. Unknown keys and unparsable values are ignored.
fn read_form(catalog: &Catalog, pairs: Vec<(String, String)>) -> (GiftForm, SelectedCriteria) {
    let mut form = catalog.default_form();
    let mut selected = SelectedCriteria::new();

    for (key, value) in pairs {
        match key.as_str() {
            "name" => form.name = value,
            "preset" => form.preset = value,
            "occasion" => form.occasion = value,
            "shape" => {
                if let Ok(shape) = value.parse() {
                    form.shape = shape;
                }
            }
            "criteria" => {
                selected.insert(value);
            }
            other => {
                if let Some(field) = DimensionField::from_name(other)
                    && let Ok(mm) = value.trim().parse::<f64>()
                    && mm.is_finite()
                {
                    form.dimensions.set(field, mm);
                }
            }
        }
    }

    (form, selected)
}

/// Link back to the planner carrying the whole form state.
fn planner_href(form: &GiftForm, selected: &SelectedCriteria) -> String {
    let mut query = form_urlencoded::Serializer::new(String::new());
    query
        .append_pair("name", &form.name)
        .append_pair("preset", &form.preset)
        .append_pair("occasion", &form.occasion)
        .append_pair("shape", form.shape.as_str());

    for field in DimensionField::ALL {
        query.append_pair(field.as_str(), &form.dimensions.get(field).to_string());
    }

    for id in selected.iter() {
        query.append_pair("criteria", id);
    }

    format!("/?{}", query.finish())
}

fn options(values: &[String], current: &str) -> Vec<OptionItem> {
    values
        .iter()
        .map(|v| OptionItem {
            value: v.clone(),
            label: v.clone(),
            selected: v == current,
        })
        .collect()
}

fn display_lines(list: &[CutDimension]) -> Vec<String> {
    list.iter().map(CutDimension::to_string).collect()
}
