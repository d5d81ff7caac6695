//! Key-removal rules for the two record shapes of an ECS task definition.
//!
//! A [`RuleTable`] is plain data: which keys are always stripped, and which
//! are stripped only when they hold their documented default. The tables
//! mirror what the `RegisterTaskDefinition` API accepts and must stay in sync
//! with it.

/// Name of the task definition field holding the container definitions.
pub const CONTAINER_DEFINITIONS_FIELD: &str = "containerDefinitions";

/// The removal rules for one record shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleTable {
    /// Keys removed unconditionally.
    pub ignored: &'static [&'static str],
    /// Keys removed when their value is `null`.
    pub null_default: &'static [&'static str],
    /// Keys removed when their value is an empty array.
    pub empty_list_default: &'static [&'static str],
}

/// Rules for the top-level task definition record.
pub const TASK_DEFINITION: RuleTable = RuleTable {
    // Rejected or regenerated by `RegisterTaskDefinition`
    ignored: &[
        "compatibilities",
        "taskDefinitionArn",
        "requiresAttributes",
        "revision",
        "status",
        "registeredAt",
        "deregisteredAt",
        "registeredBy",
    ],
    null_default: &[
        "cpu",
        "ephemeralStorage",
        "executionRoleArn",
        "inferenceAccelerators",
        "ipcMode",
        "memory",
        "networkMode",
        "pidMode",
        "placementConstraints",
        "proxyConfiguration",
        "requiresCompatibilities",
        "tags",
        "taskRoleArn",
        "volumes",
    ],
    empty_list_default: &[
        "placementConstraints",
        "requiresCompatibilities",
        "tags",
        "volumes",
    ],
};

/// Rules for each record in `containerDefinitions`.
pub const CONTAINER_DEFINITION: RuleTable = RuleTable {
    ignored: &[],
    null_default: &[
        "command",
        "cpu",
        "dependsOn",
        "disableNetworking",
        "dnsSearchDomains",
        "dnsServers",
        "dockerLabels",
        "dockerSecurityOptions",
        "entryPoint",
        "environment",
        "environmentFiles",
        "essential",
        "extraHosts",
        "firelensConfiguration",
        "healthCheck",
        "hostname",
        "image",
        "interactive",
        "links",
        "linuxParameters",
        "logConfiguration",
        "memory",
        "memoryReservation",
        "mountPoints",
        "name",
        "portMappings",
        "privileged",
        "pseudoTerminal",
        "readonlyRootFilesystem",
        "repositoryCredentials",
        "resourceCredentials",
        "resourceRequirements",
        "secrets",
        "startTimeout",
        "stopTimeout",
        "systemControls",
        "ulimits",
        "user",
        "volumesFrom",
        "workingDirectory",
    ],
    empty_list_default: &[
        "dependsOn",
        "dnsSearchDomains",
        "dnsServers",
        "dockerSecurityOptions",
        "environment",
        "environmentFiles",
        "extraHosts",
        "links",
        "mountPoints",
        "portMappings",
        "resourceRequirements",
        "secrets",
        "systemControls",
        "ulimits",
        "volumesFrom",
    ],
};
