//! Plan generator: requirement profile to implementation-plan skeleton.

use crate::spec::{Complexity, FeatureGroup, ImplementationPlanSpec, RequirementProfile};

/// Static plan template for one feature group.
struct GroupPlan {
    layers: &'static [&'static str],
    low: usize,
    high: usize,
    approach: &'static str,
}

const COMPLEX_GENERAL_LAYERS: &[&str] =
    &["Database Layer", "Backend Layer", "Integration Layer", "Testing Layer"];
const COMPLEX_GENERAL_TASKS: usize = 8;

fn group_plan(group: FeatureGroup) -> GroupPlan {
    match group {
        FeatureGroup::Auth => GroupPlan {
            layers: &["Security Layer", "Backend Layer", "Frontend Layer", "Testing Layer"],
            low: 7,
            high: 12,
            approach: "security-first",
        },
        FeatureGroup::Ui => GroupPlan {
            layers: &["Component Layer", "State Layer", "Integration Layer", "Testing Layer"],
            low: 6,
            high: 10,
            approach: "component-driven",
        },
        FeatureGroup::Api => GroupPlan {
            layers: &["Database Layer", "Service Layer", "API Layer", "Testing Layer"],
            low: 6,
            high: 10,
            approach: "contract-first",
        },
        FeatureGroup::Data => GroupPlan {
            layers: &["Schema Layer", "Migration Layer", "Model Layer", "Testing Layer"],
            low: 5,
            high: 8,
            approach: "schema-first",
        },
        FeatureGroup::Integration => GroupPlan {
            layers: &["Adapter Layer", "Service Layer", "Integration Layer", "Testing Layer"],
            low: 6,
            high: 11,
            approach: "adapter-based",
        },
        FeatureGroup::General => GroupPlan {
            layers: &["Database Layer", "Backend Layer"],
            low: 3,
            high: 6,
            approach: "incremental",
        },
    }
}

/// Derives the implementation-plan skeleton for a profile.
#[must_use]
pub fn generate_plan(profile: &RequirementProfile) -> ImplementationPlanSpec {
    let template = group_plan(profile.detected_group);
    let complex = profile.complexity == Complexity::Complex;

    let (layers, estimated_tasks) = if profile.detected_group == FeatureGroup::General && complex {
        (COMPLEX_GENERAL_LAYERS, COMPLEX_GENERAL_TASKS)
    } else if complex {
        (template.layers, template.high)
    } else {
        (template.layers, template.low)
    };

    ImplementationPlanSpec {
        layers: layers.iter().map(ToString::to_string).collect(),
        estimated_tasks,
        recommended_approach: template.approach.to_string(),
    }
}
