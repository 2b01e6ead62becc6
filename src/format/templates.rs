//! Per-group text snippets for rendered spec documents.

use crate::spec::FeatureGroup;

/// Narrative snippets for one feature group.
pub struct GroupTemplate {
    /// Elevator pitch paragraph.
    pub pitch: &'static str,
    /// Who the feature serves.
    pub target_users: &'static [&'static str],
    /// What the feature must achieve.
    pub core_goals: &'static [&'static str],
    /// Functional requirement bullets.
    pub functional: &'static [&'static str],
    /// User stories.
    pub user_stories: &'static [&'static str],
    /// What is out of scope.
    pub non_goals: &'static [&'static str],
    /// Architecture paragraph.
    pub architecture: &'static str,
    /// Component design bullets.
    pub components: &'static [&'static str],
    /// Testing strategy bullets.
    pub testing: &'static [&'static str],
    /// Success metrics.
    pub metrics: &'static [&'static str],
}

/// Returns the template for a feature group.
#[must_use]
pub fn group_template(group: FeatureGroup) -> &'static GroupTemplate {
    match group {
        FeatureGroup::Auth => &AUTH,
        FeatureGroup::Ui => &UI,
        FeatureGroup::Api => &API,
        FeatureGroup::Data => &DATA,
        FeatureGroup::Integration => &INTEGRATION,
        FeatureGroup::General => &GENERAL,
    }
}

/// Task descriptions for a layer, cycled when a layer needs more tasks.
///
/// `{feature}` is replaced with the spec title.
#[must_use]
pub fn layer_tasks(layer: &str) -> &'static [(&'static str, &'static str)] {
    match layer.split_whitespace().next().unwrap_or_default() {
        "Security" => &[
            ("Threat-model the {feature} flow", "2h"),
            ("Implement credential hashing and token signing", "4h"),
            ("Add rate limiting and lockout rules", "3h"),
        ],
        "Backend" => &[
            ("Implement core {feature} service logic", "4h"),
            ("Expose handlers for {feature}", "3h"),
            ("Add structured error handling", "2h"),
        ],
        "Frontend" => &[
            ("Build {feature} forms and views", "4h"),
            ("Wire client-side validation", "2h"),
        ],
        "Component" => &[
            ("Create {feature} components", "4h"),
            ("Add accessibility attributes and keyboard support", "2h"),
        ],
        "State" => &[
            ("Model {feature} state and actions", "3h"),
            ("Persist and restore view state", "2h"),
        ],
        "Database" => &[
            ("Design tables for {feature}", "3h"),
            ("Add indexes for expected queries", "1h"),
        ],
        "Service" => &[
            ("Implement {feature} service layer", "4h"),
            ("Add retries and timeouts for dependencies", "2h"),
        ],
        "API" => &[
            ("Define {feature} endpoint contracts", "2h"),
            ("Implement request validation", "2h"),
            ("Document endpoints", "1h"),
        ],
        "Schema" => &[
            ("Define {feature} schema", "2h"),
            ("Add constraints and defaults", "1h"),
        ],
        "Migration" => &[
            ("Write forward migration for {feature}", "2h"),
            ("Write and verify rollback", "2h"),
        ],
        "Model" => &[
            ("Implement {feature} models", "3h"),
            ("Add model-level validation", "2h"),
        ],
        "Adapter" => &[
            ("Implement client adapter for {feature}", "4h"),
            ("Map external payloads to internal types", "2h"),
        ],
        "Integration" => &[
            ("Connect {feature} to its collaborators", "3h"),
            ("Handle partial failures from external calls", "2h"),
        ],
        "Testing" => &[
            ("Write unit tests for {feature}", "3h"),
            ("Write integration tests for {feature}", "3h"),
            ("Add regression cases for edge inputs", "2h"),
        ],
        _ => &[("Implement {feature} changes", "3h")],
    }
}

static AUTH: GroupTemplate = GroupTemplate {
    pitch: "Give users a secure, low-friction way to prove who they are.",
    target_users: &["End users signing in", "Administrators managing access"],
    core_goals: &["Protect accounts against takeover", "Keep sign-in fast"],
    functional: &[
        "Authenticate users with verified credentials",
        "Issue and revoke sessions or tokens",
    ],
    user_stories: &["As a user, I can sign in securely so that my data stays private."],
    non_goals: &["Replacing the identity provider", "Fine-grained role modelling"],
    architecture: "Stateless token validation at the edge with a backend credential service.",
    components: &["Credential service", "Token issuer", "Session middleware"],
    testing: &[
        "Unit tests for hashing and token validation",
        "Integration tests for sign-in flows",
    ],
    metrics: &["Zero credential leaks", "Sign-in p95 under 300ms"],
};

static UI: GroupTemplate = GroupTemplate {
    pitch: "Make the feature obvious and pleasant to use.",
    target_users: &["Everyday users of the application"],
    core_goals: &["Clear, consistent interaction", "Accessible by default"],
    functional: &["Render the new views", "Reflect state changes immediately"],
    user_stories: &[
        "As a user, I can see and act on the information I need without hunting for it.",
    ],
    non_goals: &["Full visual redesign"],
    architecture: "Composable components backed by a single state store.",
    components: &["View components", "State store", "Data fetching hooks"],
    testing: &["Component tests", "Accessibility checks"],
    metrics: &["Task completion rate above 90%", "No accessibility regressions"],
};

static API: GroupTemplate = GroupTemplate {
    pitch: "Expose the capability through a stable, documented interface.",
    target_users: &["Client applications", "Third-party developers"],
    core_goals: &["Stable contracts", "Predictable errors"],
    functional: &["Serve the new endpoints", "Validate every request"],
    user_stories: &["As a client developer, I can call the endpoint and rely on its contract."],
    non_goals: &["Versioning the existing endpoints"],
    architecture: "Thin handlers over a service layer with a persistence boundary.",
    components: &["Route handlers", "Service layer", "Repository"],
    testing: &["Contract tests", "Service unit tests"],
    metrics: &["Error rate under 0.1%", "p95 latency under 200ms"],
};

static DATA: GroupTemplate = GroupTemplate {
    pitch: "Store the data the feature needs safely and queryably.",
    target_users: &["Application services", "Analysts"],
    core_goals: &["Correct, reversible schema changes", "Efficient queries"],
    functional: &["Add the new schema", "Migrate existing records"],
    user_stories: &["As a service, I can read and write the new records consistently."],
    non_goals: &["Changing the storage engine"],
    architecture: "Versioned migrations with models enforcing invariants.",
    components: &["Schema definitions", "Migrations", "Models"],
    testing: &["Migration up/down tests", "Model validation tests"],
    metrics: &["Zero data loss during migration", "Query p95 under 50ms"],
};

static INTEGRATION: GroupTemplate = GroupTemplate {
    pitch: "Connect the system to the outside service reliably.",
    target_users: &["Operators", "Downstream systems"],
    core_goals: &["Reliable delivery", "Isolation from external failures"],
    functional: &["Exchange data with the external system", "Recover from transient failures"],
    user_stories: &[
        "As an operator, I can trust that external events arrive exactly when expected.",
    ],
    non_goals: &["Owning the external system"],
    architecture: "Adapter boundary translating external payloads into internal types.",
    components: &["External client adapter", "Integration service", "Payload mappers"],
    testing: &["Adapter tests against recorded payloads", "Failure-injection tests"],
    metrics: &["Delivery success above 99.5%", "Recovery within one retry window"],
};

static GENERAL: GroupTemplate = GroupTemplate {
    pitch: "Deliver the requested capability with minimal disruption.",
    target_users: &["Users of the affected workflow"],
    core_goals: &["Ship the capability", "Keep existing behavior intact"],
    functional: &["Implement the requested behavior"],
    user_stories: &["As a user, I can use the new capability as described."],
    non_goals: &["Unrelated refactoring"],
    architecture: "Incremental changes within the existing backend.",
    components: &["Persistence changes", "Backend logic"],
    testing: &["Unit tests for new logic"],
    metrics: &["Feature used by target users", "No new regressions"],
};
