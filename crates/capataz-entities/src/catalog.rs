//! Declarative catalog of the server's resource types
//!
//! Each entry records the REST path template, payload quirks, server modes,
//! and field list of one resource. The catalog is plain data; all behavior
//! lives in the factory and the facade client.

use crate::constants::api_path;
use crate::descriptor::{EntityDescriptor, ServerMode};
use crate::error::{EntityError, Result};
use crate::fields::{FieldDef, StrKind, StrSpec};

const SAT: &[ServerMode] = &[ServerMode::Sat];
const SAT_SAM: &[ServerMode] = &[ServerMode::Sat, ServerMode::Sam];

const OS_FAMILIES: &[&str] = &[
    "AIX",
    "Archlinux",
    "Debian",
    "Freebsd",
    "Gentoo",
    "Junos",
    "Redhat",
    "Solaris",
    "Suse",
    "Windows",
];

const COMPUTE_PROVIDERS: &[&str] = &[
    "EC2",
    "GCE",
    "Libvirt",
    "Openstack",
    "Ovirt",
    "Rackspace",
    "Vmware",
];

pub static CATALOG: &[EntityDescriptor] = &[
    EntityDescriptor {
        name: "activation_key",
        api_path: api_path::ACTIVATION_KEYS,
        payload_root: None,
        server_modes: SAT_SAM,
        fields: &[
            FieldDef::one_to_one("organization", "organization").required(),
            FieldDef::string("name").required(),
            FieldDef::string("description"),
            FieldDef::one_to_one("environment", "lifecycle_environment"),
            FieldDef::one_to_one("content_view", "content_view"),
            FieldDef::boolean("unlimited_content_hosts"),
            FieldDef::integer("max_content_hosts"),
            FieldDef::one_to_many("host_collection", "host_collection"),
        ],
    },
    EntityDescriptor {
        name: "architecture",
        api_path: api_path::ARCHITECTURES,
        payload_root: Some("architecture"),
        server_modes: SAT,
        fields: &[
            FieldDef::string("name").required(),
            FieldDef::one_to_many("operatingsystem", "operating_system"),
        ],
    },
    EntityDescriptor {
        name: "auth_source_ldap",
        api_path: "api/v2/auth_source_ldaps",
        payload_root: None,
        server_modes: SAT,
        fields: &[
            FieldDef::string("account"),
            FieldDef::string("attr_photo"),
            FieldDef::string("base_dn"),
            FieldDef::string_spec("host", StrSpec::DEFAULT.len(1, 60)).required(),
            FieldDef::string_spec("name", StrSpec::DEFAULT.len(1, 60)).required(),
            FieldDef::boolean("onthefly_register"),
            FieldDef::integer("port"),
            FieldDef::boolean("tls"),
            // required when onthefly_register is set
            FieldDef::string("account_password"),
            FieldDef::string("attr_firstname"),
            FieldDef::string("attr_lastname"),
            FieldDef::string("attr_login"),
            FieldDef::email("attr_mail"),
        ],
    },
    EntityDescriptor {
        name: "bookmark",
        api_path: "api/v2/bookmarks",
        payload_root: None,
        server_modes: SAT,
        fields: &[
            FieldDef::string("name").required(),
            FieldDef::string("controller").required(),
            FieldDef::string("query").required(),
            FieldDef::boolean("public"),
        ],
    },
    EntityDescriptor {
        name: "common_parameter",
        api_path: "api/v2/common_parameters",
        payload_root: None,
        server_modes: SAT,
        fields: &[
            FieldDef::string("name").required(),
            FieldDef::string("value").required(),
        ],
    },
    EntityDescriptor {
        name: "compute_attribute",
        api_path: "api/v2/compute_attributes",
        payload_root: None,
        server_modes: SAT,
        fields: &[
            FieldDef::one_to_one("compute_profile", "compute_profile").required(),
            FieldDef::one_to_one("compute_resource", "compute_resource").required(),
        ],
    },
    EntityDescriptor {
        name: "compute_profile",
        api_path: "api/v2/compute_profiles",
        payload_root: None,
        server_modes: SAT,
        fields: &[FieldDef::string("name").required()],
    },
    EntityDescriptor {
        name: "compute_resource",
        api_path: "api/v2/compute_resources",
        payload_root: None,
        server_modes: SAT,
        fields: &[
            FieldDef::string("description"),
            // name cannot contain whitespace
            FieldDef::string_spec(
                "name",
                StrSpec::DEFAULT.kinds(&[StrKind::Alphanumeric, StrKind::Cjk]),
            ),
            FieldDef::string("password"),
            FieldDef::string_spec("provider", StrSpec::DEFAULT.choices(COMPUTE_PROVIDERS))
                .required(),
            FieldDef::string("region"),
            FieldDef::string("server"),
            FieldDef::string("tenant"),
            FieldDef::url("url").required(),
            FieldDef::string("user"),
            FieldDef::string("uuid"),
        ],
    },
    EntityDescriptor {
        name: "config_group",
        api_path: "api/v2/config_groups",
        payload_root: None,
        server_modes: SAT,
        fields: &[FieldDef::string("name").required()],
    },
    EntityDescriptor {
        name: "config_template",
        api_path: "api/v2/config_templates",
        payload_root: None,
        server_modes: SAT,
        fields: &[
            FieldDef::string("audit_comment"),
            FieldDef::boolean("locked"),
            FieldDef::string("name").required(),
            FieldDef::one_to_many("operatingsystem", "operating_system"),
            FieldDef::boolean("snippet").required(),
            FieldDef::list("template_combinations"),
            FieldDef::one_to_one("template_kind", "template_kind"),
            FieldDef::string("template").required(),
        ],
    },
    EntityDescriptor {
        name: "content_upload",
        api_path: "katello/api/v2/repositories/:repository_id/content_uploads",
        payload_root: None,
        server_modes: SAT,
        fields: &[FieldDef::one_to_one("repository", "repository").required()],
    },
    EntityDescriptor {
        name: "content_view",
        api_path: api_path::CONTENT_VIEWS,
        payload_root: None,
        server_modes: SAT,
        fields: &[
            FieldDef::one_to_one("organization", "organization").required(),
            FieldDef::string("name").required(),
            FieldDef::string("label"),
            FieldDef::boolean("composite"),
            FieldDef::string("description"),
            FieldDef::one_to_many("repository", "repository"),
            // component content view versions for composite views
            FieldDef::one_to_many("component", "content_view"),
        ],
    },
    EntityDescriptor {
        name: "content_view_filter",
        api_path: "katello/api/v2/content_view_filters",
        payload_root: None,
        server_modes: SAT,
        fields: &[
            FieldDef::one_to_one("content_view", "content_view").required(),
            FieldDef::string("name").required(),
            // rpm, package_group or erratum
            FieldDef::string("filter_type").required().renamed("type"),
            FieldDef::boolean("original_packages"),
            FieldDef::boolean("inclusion"),
            FieldDef::one_to_many("repository", "repository"),
        ],
    },
    EntityDescriptor {
        name: "content_view_filter_rule",
        api_path: "katello/api/v2/content_view_filters/:content_view_filter_id/rules",
        payload_root: None,
        server_modes: SAT,
        fields: &[
            FieldDef::one_to_one("content_view_filter", "content_view_filter").required(),
            FieldDef::string("name"),
            FieldDef::string("version"),
            FieldDef::string("min_version"),
            FieldDef::string("max_version"),
            FieldDef::one_to_one("errata", "errata"),
            FieldDef::date("start_date"),
            FieldDef::date("end_date"),
            // erratum types: enhancement, bugfix, security
            FieldDef::list("types"),
        ],
    },
    EntityDescriptor {
        name: "content_view_puppet_module",
        api_path: "katello/api/v2/content_views/:content_view_id/content_view_puppet_modules",
        payload_root: None,
        server_modes: SAT,
        fields: &[
            FieldDef::one_to_one("content_view", "content_view").required(),
            FieldDef::string("name"),
            FieldDef::string("author"),
            FieldDef::string("uuid"),
        ],
    },
    EntityDescriptor {
        name: "content_view_version",
        api_path: api_path::CONTENT_VIEW_VERSIONS,
        payload_root: None,
        server_modes: SAT,
        fields: &[],
    },
    EntityDescriptor {
        name: "custom_info",
        api_path: "katello/api/v2/custom_info/:informable_type/:informable_id",
        payload_root: None,
        server_modes: SAT,
        fields: &[
            FieldDef::string("informable_type").required(),
            FieldDef::string("keyname").required(),
            FieldDef::string("value").required(),
        ],
    },
    EntityDescriptor {
        name: "domain",
        api_path: "api/v2/domains",
        payload_root: None,
        server_modes: SAT,
        fields: &[
            FieldDef::list("domain_parameters_attributes"),
            FieldDef::string("fullname"),
            FieldDef::string("name").required(),
        ],
    },
    EntityDescriptor {
        name: "environment",
        api_path: "api/v2/environments",
        payload_root: None,
        server_modes: SAT,
        fields: &[
            FieldDef::string_spec(
                "name",
                StrSpec::DEFAULT.kinds(&[
                    StrKind::Alpha,
                    StrKind::Numeric,
                    StrKind::Alphanumeric,
                ]),
            )
            .required(),
        ],
    },
    EntityDescriptor {
        name: "errata",
        // errata are read-only
        api_path: "api/v2/errata",
        payload_root: None,
        server_modes: SAT,
        fields: &[],
    },
    EntityDescriptor {
        name: "filter",
        api_path: "api/v2/filters",
        payload_root: None,
        server_modes: SAT,
        fields: &[
            FieldDef::one_to_one("role", "role").required(),
            FieldDef::string("search"),
            FieldDef::one_to_many("permission", "permission"),
            FieldDef::one_to_many("organization", "organization"),
            FieldDef::one_to_many("location", "location"),
        ],
    },
    EntityDescriptor {
        name: "foreman_task",
        api_path: api_path::TASKS,
        payload_root: None,
        server_modes: SAT,
        fields: &[],
    },
    EntityDescriptor {
        name: "gpg_key",
        api_path: api_path::GPG_KEYS,
        payload_root: None,
        server_modes: SAT,
        fields: &[
            FieldDef::one_to_one("organization", "organization").required(),
            FieldDef::one_to_one("location", "location"),
            FieldDef::string("name").required(),
            // public key block in DER encoding
            FieldDef::string("content").required(),
        ],
    },
    EntityDescriptor {
        name: "host",
        api_path: api_path::HOSTS,
        payload_root: None,
        server_modes: SAT,
        fields: &[
            FieldDef::one_to_one("architecture", "architecture").required(),
            FieldDef::boolean("build"),
            FieldDef::string("capabilities"),
            FieldDef::one_to_one("compute_profile", "compute_profile"),
            FieldDef::one_to_one("compute_resource", "compute_resource"),
            FieldDef::one_to_one("domain", "domain").required(),
            FieldDef::boolean("enabled"),
            FieldDef::one_to_one("environment", "environment").required(),
            FieldDef::one_to_one("hostgroup", "host_group"),
            FieldDef::list("host_parameters_attributes"),
            FieldDef::one_to_one("image", "image"),
            FieldDef::ip("ip"),
            FieldDef::one_to_one("location", "location").required(),
            FieldDef::mac("mac").required(),
            FieldDef::boolean("managed"),
            FieldDef::one_to_one("medium", "media"),
            FieldDef::one_to_one("model", "model"),
            FieldDef::string("name").required(),
            FieldDef::one_to_one("operatingsystem", "operating_system").required(),
            FieldDef::one_to_one("organization", "organization").required(),
            FieldDef::one_to_one("owner", "user"),
            FieldDef::string("provision_method"),
            FieldDef::one_to_one("ptable", "partition_table"),
            FieldDef::one_to_many("puppet_class", "puppet_class"),
            FieldDef::one_to_one("puppet_proxy", "smart_proxy").required(),
            FieldDef::one_to_one("realm", "realm"),
            FieldDef::string_spec("root_pass", StrSpec::DEFAULT.len(8, 30)).required(),
            FieldDef::one_to_one("sp_subnet", "subnet"),
            FieldDef::one_to_one("subnet", "subnet"),
        ],
    },
    EntityDescriptor {
        name: "host_classes",
        api_path: "api/v2/hosts/:host_id/puppetclass_ids",
        payload_root: None,
        server_modes: SAT,
        fields: &[
            FieldDef::one_to_one("host", "host").required(),
            FieldDef::one_to_one("puppetclass", "puppet_class").required(),
        ],
    },
    EntityDescriptor {
        name: "host_collection",
        api_path: api_path::HOST_COLLECTIONS,
        payload_root: None,
        server_modes: SAT_SAM,
        fields: &[
            FieldDef::string("description"),
            FieldDef::integer("max_content_hosts"),
            FieldDef::string("name").required(),
            FieldDef::one_to_one("organization", "organization").required(),
            FieldDef::one_to_many("system", "system"),
        ],
    },
    EntityDescriptor {
        name: "host_collection_errata",
        api_path: "katello/api/v2/organizations/:organization_id/host_collections/:host_collection_id/errata",
        payload_root: None,
        server_modes: SAT,
        fields: &[FieldDef::one_to_many("errata", "errata").required()],
    },
    EntityDescriptor {
        name: "host_collection_package",
        api_path: "katello/api/v2/organizations/:organization_id/host_collections/:host_collection_id/packages",
        payload_root: None,
        server_modes: SAT,
        fields: &[FieldDef::list("packages"), FieldDef::list("groups")],
    },
    EntityDescriptor {
        name: "host_group",
        api_path: "api/v2/hostgroups",
        payload_root: None,
        server_modes: SAT,
        fields: &[
            FieldDef::string("name").required(),
            FieldDef::one_to_one("parent", "host_group"),
            FieldDef::one_to_one("environment", "environment"),
            FieldDef::one_to_one("operatingsystem", "operating_system"),
            FieldDef::one_to_one("architecture", "architecture"),
            FieldDef::one_to_one("medium", "media"),
            FieldDef::one_to_one("ptable", "partition_table"),
            FieldDef::one_to_one("subnet", "subnet"),
            FieldDef::one_to_one("domain", "domain"),
            FieldDef::one_to_one("realm", "realm"),
        ],
    },
    EntityDescriptor {
        name: "host_group_classes",
        api_path: "api/v2/hostgroups/:hostgroup_id/puppetclass_ids",
        payload_root: None,
        server_modes: SAT,
        fields: &[
            FieldDef::one_to_one("hostgroup", "host_group").required(),
            FieldDef::one_to_one("puppetclass", "puppet_class").required(),
        ],
    },
    EntityDescriptor {
        name: "image",
        api_path: "api/v2/compute_resources/:compute_resource_id/images",
        payload_root: None,
        server_modes: SAT,
        fields: &[
            FieldDef::one_to_one("compute_resource", "compute_resource").required(),
            FieldDef::string("name").required(),
            FieldDef::string("username").required(),
            FieldDef::string("uuid").required(),
            FieldDef::one_to_one("architecture", "architecture").required(),
            FieldDef::one_to_one("operatingsystem", "operating_system").required(),
        ],
    },
    EntityDescriptor {
        name: "interface",
        api_path: "api/v2/hosts/:host_id/interfaces",
        payload_root: None,
        server_modes: SAT,
        fields: &[
            FieldDef::one_to_one("host", "host").required(),
            FieldDef::mac("mac").required(),
            FieldDef::ip("ip").required(),
            // e.g. Nic::BMC
            FieldDef::string("interface_type").required().renamed("type"),
            FieldDef::string("name").required(),
            FieldDef::one_to_one("subnet", "subnet"),
            FieldDef::one_to_one("domain", "domain"),
            FieldDef::string("username"),
            FieldDef::string("password"),
            // e.g. IPMI
            FieldDef::string("provider"),
        ],
    },
    EntityDescriptor {
        name: "lifecycle_environment",
        api_path: api_path::LIFECYCLE_ENVIRONMENTS,
        payload_root: None,
        server_modes: SAT,
        fields: &[
            FieldDef::one_to_one("organization", "organization").required(),
            FieldDef::string("name").required(),
            FieldDef::string("description"),
            // the server expects this foreign key as "prior", not "prior_id"
            FieldDef::one_to_one("prior", "lifecycle_environment").renamed("prior"),
        ],
    },
    EntityDescriptor {
        name: "location",
        api_path: "api/v2/locations",
        payload_root: None,
        server_modes: SAT,
        fields: &[FieldDef::string("name").required()],
    },
    EntityDescriptor {
        name: "media",
        api_path: "api/v2/media",
        payload_root: Some("medium"),
        server_modes: SAT,
        fields: &[
            FieldDef::url("media_path").required().renamed("path"),
            FieldDef::string("name").required(),
            FieldDef::one_to_many("operatingsystem", "operating_system"),
            FieldDef::string_spec("os_family", StrSpec::DEFAULT.choices(OS_FAMILIES)),
        ],
    },
    EntityDescriptor {
        name: "model",
        api_path: "api/v2/models",
        payload_root: None,
        server_modes: SAT,
        fields: &[
            FieldDef::string("name").required(),
            FieldDef::string("info"),
            FieldDef::string("vendor_class"),
            FieldDef::string("hardware_model"),
        ],
    },
    EntityDescriptor {
        name: "operating_system",
        api_path: "api/v2/operatingsystems",
        payload_root: Some("operatingsystem"),
        server_modes: SAT,
        fields: &[
            FieldDef::one_to_many("architecture", "architecture").renamed("architectures"),
            FieldDef::string("description"),
            FieldDef::string_spec("family", StrSpec::DEFAULT.choices(OS_FAMILIES)),
            // only numeric values are accepted, at most 5 digits
            FieldDef::string_spec("major", StrSpec::DEFAULT.kinds(&[StrKind::Numeric]).len(1, 5))
                .required(),
            FieldDef::one_to_many("media", "media").renamed("media"),
            FieldDef::string("minor"),
            FieldDef::string("name").required(),
            FieldDef::one_to_many("ptable", "partition_table").renamed("ptables"),
            FieldDef::string("release_name"),
        ],
    },
    EntityDescriptor {
        name: "operating_system_parameter",
        api_path: "api/v2/operatingsystems/:operatingsystem_id/parameters",
        payload_root: None,
        server_modes: SAT,
        fields: &[
            FieldDef::string("name").required(),
            FieldDef::string("value").required(),
        ],
    },
    EntityDescriptor {
        name: "organization",
        api_path: api_path::ORGANIZATIONS,
        payload_root: None,
        server_modes: SAT_SAM,
        fields: &[
            FieldDef::string("name").required(),
            FieldDef::string_spec("label", StrSpec::DEFAULT.kinds(&[StrKind::Alpha])),
            FieldDef::string("description"),
        ],
    },
    EntityDescriptor {
        name: "organization_default_info",
        api_path: "katello/api/v2/organizations/:organization_id/default_info/:informable_type",
        payload_root: None,
        server_modes: SAT_SAM,
        fields: &[
            FieldDef::string("informable_type").required(),
            FieldDef::string("keyname").required(),
            FieldDef::string("name").required(),
            FieldDef::string("info"),
            FieldDef::string("vendor_class"),
            FieldDef::string("hardware_model"),
        ],
    },
    EntityDescriptor {
        name: "os_default_template",
        api_path: "api/v2/operatingsystems/:operatingsystem_id/os_default_templates",
        payload_root: None,
        server_modes: SAT,
        fields: &[
            FieldDef::one_to_one("operatingsystem", "operating_system"),
            FieldDef::one_to_one("template_kind", "template_kind"),
            FieldDef::one_to_one("config_template", "config_template"),
        ],
    },
    EntityDescriptor {
        name: "override_value",
        api_path: "api/v2/smart_variables/:smart_variable_id/override_values",
        payload_root: None,
        server_modes: SAT,
        fields: &[
            FieldDef::one_to_one("smart_variable", "smart_variable"),
            FieldDef::string("match"),
            FieldDef::string("value"),
        ],
    },
    EntityDescriptor {
        name: "partition_table",
        api_path: "api/v2/ptables",
        payload_root: None,
        server_modes: SAT,
        fields: &[
            FieldDef::string("name").required(),
            FieldDef::string("layout").required(),
            FieldDef::string_spec("os_family", StrSpec::DEFAULT.choices(OS_FAMILIES)),
        ],
    },
    EntityDescriptor {
        name: "permission",
        api_path: api_path::PERMISSIONS,
        payload_root: None,
        server_modes: SAT_SAM,
        fields: &[
            FieldDef::string("name").required(),
            FieldDef::string("resource_type").required(),
        ],
    },
    EntityDescriptor {
        name: "ping",
        api_path: api_path::PING,
        payload_root: None,
        server_modes: SAT_SAM,
        fields: &[],
    },
    EntityDescriptor {
        name: "product",
        api_path: api_path::PRODUCTS,
        payload_root: None,
        server_modes: SAT_SAM,
        fields: &[
            FieldDef::one_to_one("organization", "organization").required(),
            FieldDef::one_to_one("location", "location"),
            FieldDef::string("description"),
            FieldDef::one_to_one("gpg_key", "gpg_key"),
            FieldDef::one_to_one("sync_plan", "sync_plan"),
            FieldDef::string("name").required(),
            FieldDef::string("label"),
        ],
    },
    EntityDescriptor {
        name: "puppet_class",
        api_path: "api/v2/puppetclasses",
        payload_root: None,
        server_modes: SAT,
        fields: &[FieldDef::string("name").required()],
    },
    EntityDescriptor {
        name: "realm",
        api_path: "api/v2/realms",
        payload_root: None,
        server_modes: SAT,
        fields: &[
            // e.g. EXAMPLE.COM
            FieldDef::string("name").required(),
            // e.g. Red Hat Identity Management or Active Directory
            FieldDef::string("realm_type").required(),
        ],
    },
    EntityDescriptor {
        name: "report",
        api_path: "api/v2/reports",
        payload_root: None,
        server_modes: SAT,
        fields: &[
            // hostname or certname
            FieldDef::string("host").required(),
            FieldDef::datetime("reported_at").required(),
            FieldDef::list("logs"),
        ],
    },
    EntityDescriptor {
        name: "repository",
        api_path: api_path::REPOSITORIES,
        payload_root: None,
        server_modes: SAT,
        fields: &[
            FieldDef::string_spec("checksum_type", StrSpec::DEFAULT.choices(&["sha1", "sha256"])),
            FieldDef::string_spec(
                "content_type",
                StrSpec::DEFAULT.choices(&["puppet", "yum", "file"]),
            )
            .required()
            .with_default("\"yum\""),
            FieldDef::one_to_one("gpg_key", "gpg_key"),
            FieldDef::string("label"),
            FieldDef::string("name").required(),
            FieldDef::one_to_one("product", "product").required(),
            FieldDef::boolean("unprotected"),
            FieldDef::url("url")
                .required()
                .with_default("\"http://inecas.fedorapeople.org/fakerepos/zoo3/\""),
        ],
    },
    EntityDescriptor {
        name: "role",
        api_path: "api/v2/roles",
        payload_root: None,
        server_modes: SAT_SAM,
        fields: &[
            FieldDef::string_spec(
                "name",
                StrSpec::DEFAULT.kinds(&[StrKind::Alphanumeric]).len(2, 30),
            )
            .required(),
        ],
    },
    EntityDescriptor {
        name: "role_ldap_groups",
        api_path: "katello/api/v2/roles/:role_id/ldap_groups",
        payload_root: None,
        server_modes: SAT_SAM,
        fields: &[FieldDef::string("name").required()],
    },
    EntityDescriptor {
        name: "smart_proxy",
        api_path: api_path::SMART_PROXIES,
        payload_root: None,
        server_modes: SAT,
        fields: &[
            FieldDef::string("name").required(),
            FieldDef::url("url").required(),
        ],
    },
    EntityDescriptor {
        name: "smart_variable",
        api_path: "api/v2/smart_variables",
        payload_root: None,
        server_modes: SAT,
        fields: &[
            FieldDef::string("variable").required(),
            FieldDef::one_to_one("puppetclass", "puppet_class"),
            FieldDef::string("default_value"),
            FieldDef::string("override_value_order"),
            FieldDef::string("description"),
            FieldDef::string("validator_type"),
            FieldDef::string("validator_rule"),
            FieldDef::string("variable_type"),
        ],
    },
    EntityDescriptor {
        name: "status",
        api_path: api_path::STATUS,
        payload_root: None,
        server_modes: SAT,
        fields: &[],
    },
    EntityDescriptor {
        name: "subnet",
        api_path: "api/v2/subnets",
        payload_root: None,
        server_modes: SAT,
        fields: &[
            FieldDef::ip("dns_primary"),
            FieldDef::ip("dns_secondary"),
            FieldDef::one_to_many("domain", "domain"),
            FieldDef::ip("from"),
            FieldDef::string("gateway"),
            FieldDef::netmask("mask").required(),
            FieldDef::string("name").required(),
            FieldDef::ip("network").required(),
            FieldDef::ip("to"),
            FieldDef::string("vlanid"),
        ],
    },
    EntityDescriptor {
        name: "subscription",
        api_path: "katello/api/v2/subscriptions/:id",
        payload_root: None,
        server_modes: SAT_SAM,
        fields: &[
            // subscription pool uuid
            FieldDef::string("pool_uuid").renamed("id"),
            FieldDef::one_to_one("system", "system"),
            FieldDef::one_to_one("activation_key", "activation_key"),
            FieldDef::integer("quantity"),
            FieldDef::one_to_many("subscription", "subscription"),
        ],
    },
    EntityDescriptor {
        name: "sync_plan",
        api_path: "katello/api/v2/organizations/:organization_id/sync_plans",
        payload_root: None,
        server_modes: SAT,
        fields: &[
            FieldDef::one_to_one("organization", "organization").required(),
            FieldDef::string("name").required(),
            FieldDef::string_spec(
                "interval",
                StrSpec::DEFAULT.choices(&["none", "hourly", "daily", "weekly"]),
            )
            .required(),
            FieldDef::datetime("sync_date").required(),
            FieldDef::string("description"),
        ],
    },
    EntityDescriptor {
        name: "system",
        api_path: api_path::SYSTEMS,
        payload_root: None,
        server_modes: SAT_SAM,
        fields: &[
            FieldDef::one_to_one("content_view", "content_view"),
            FieldDef::string("description"),
            FieldDef::one_to_one("environment", "environment"),
            FieldDef::dict("facts")
                .required()
                .with_default("{\"uname.machine\": \"unknown\"}"),
            FieldDef::one_to_one("host_collection", "host_collection"),
            FieldDef::list("installed_products"),
            FieldDef::datetime("last_checkin"),
            FieldDef::string("location"),
            FieldDef::string("name").required(),
            FieldDef::one_to_one("organization", "organization").required(),
            FieldDef::string("release_ver"),
            FieldDef::string("service_level"),
            FieldDef::string("uuid"),
            FieldDef::string("type").required().with_default("\"system\""),
        ],
    },
    EntityDescriptor {
        name: "system_package",
        api_path: "katello/api/v2/systems/:system_id/packages",
        payload_root: None,
        server_modes: SAT,
        fields: &[
            FieldDef::one_to_one("system", "system").required(),
            FieldDef::list("packages"),
            FieldDef::list("groups"),
        ],
    },
    EntityDescriptor {
        name: "template_combination",
        api_path: "api/v2/config_templates/:config_template_id/template_combinations",
        payload_root: None,
        server_modes: SAT,
        fields: &[
            FieldDef::one_to_one("config_template", "config_template").required(),
            FieldDef::one_to_one("environment", "environment"),
            FieldDef::one_to_one("hostgroup", "host_group"),
        ],
    },
    EntityDescriptor {
        name: "template_kind",
        // the server pre-populates exactly eight template kinds
        api_path: "api/v2/template_kinds",
        payload_root: None,
        server_modes: SAT,
        fields: &[],
    },
    EntityDescriptor {
        name: "user",
        api_path: api_path::USERS,
        payload_root: Some("user"),
        server_modes: SAT_SAM,
        fields: &[
            FieldDef::string_spec(
                "login",
                StrSpec::DEFAULT
                    .kinds(&[
                        StrKind::Alpha,
                        StrKind::Alphanumeric,
                        StrKind::Cjk,
                        StrKind::Latin1,
                    ])
                    .len(1, 100),
            )
            .required(),
            FieldDef::boolean("admin"),
            // the internal auth source is nearly guaranteed to exist
            FieldDef::one_to_one("auth_source", "auth_source_ldap")
                .required()
                .with_default("1"),
            FieldDef::one_to_one("default_location", "location"),
            FieldDef::one_to_one("default_organization", "organization"),
            FieldDef::string_spec("firstname", StrSpec::DEFAULT.len(1, 50)),
            FieldDef::string_spec("lastname", StrSpec::DEFAULT.len(1, 50)),
            FieldDef::email("mail").required(),
            FieldDef::string("password").required(),
        ],
    },
    EntityDescriptor {
        name: "user_group",
        api_path: "api/v2/usergroups",
        payload_root: None,
        server_modes: SAT,
        fields: &[FieldDef::string("name").required()],
    },
];

/// Look up a descriptor by entity name
pub fn descriptor(name: &str) -> Result<&'static EntityDescriptor> {
    CATALOG
        .iter()
        .find(|d| d.name == name)
        .ok_or_else(|| EntityError::UnknownEntity(name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::FieldKind;

    #[test]
    fn test_lookup() {
        assert!(descriptor("organization").is_ok());
        assert!(descriptor("content_view").is_ok());
        assert!(matches!(
            descriptor("no_such_thing"),
            Err(EntityError::UnknownEntity(_))
        ));
    }

    #[test]
    fn test_names_are_unique() {
        for (i, a) in CATALOG.iter().enumerate() {
            for b in &CATALOG[i + 1..] {
                assert_ne!(a.name, b.name, "duplicate catalog entry");
            }
        }
    }

    #[test]
    fn test_paths_are_relative() {
        for desc in CATALOG {
            assert!(!desc.api_path.is_empty(), "{} has no path", desc.name);
            assert!(
                !desc.api_path.starts_with('/'),
                "{} path should be relative",
                desc.name
            );
        }
    }

    #[test]
    fn test_reference_targets_resolve() {
        for desc in CATALOG {
            for field in desc.fields {
                if let FieldKind::OneToOne(target) | FieldKind::OneToMany(target) = field.kind {
                    assert!(
                        descriptor(target).is_ok(),
                        "{}.{} points at unknown entity '{}'",
                        desc.name,
                        field.name,
                        target
                    );
                }
            }
        }
    }

    #[test]
    fn test_defaults_are_valid_json() {
        for desc in CATALOG {
            for field in desc.fields {
                if let Some(literal) = field.default {
                    serde_json::from_str::<serde_json::Value>(literal).unwrap_or_else(|e| {
                        panic!("{}.{} default does not parse: {e}", desc.name, field.name)
                    });
                }
            }
        }
    }

    #[test]
    fn test_server_mode_entities() {
        // subscription-management deployments see only a subset
        let sam: Vec<&str> = CATALOG
            .iter()
            .filter(|d| d.available_in(ServerMode::Sam))
            .map(|d| d.name)
            .collect();
        assert!(sam.contains(&"organization"));
        assert!(sam.contains(&"activation_key"));
        assert!(!sam.contains(&"host"));
        assert!(!sam.contains(&"repository"));
    }
}
