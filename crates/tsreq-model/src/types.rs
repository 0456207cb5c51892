//! String-backed enumerations used by entity views.
//!
//! Every enum carries its exact wire spelling: `as_str` returns it, `Display`
//! writes it, and serde uses it. Parsing with `FromStr` rejects unknown input.

use serde::{Deserialize, Serialize};

/// A string that names no variant of a wire enum.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} value: {value}")]
pub struct UnknownVariant {
    /// Name of the enum.
    pub kind: &'static str,
    /// The rejected input.
    pub value: String,
}

macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $first:ident => $first_wire:literal,
            $($variant:ident => $wire:literal),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
        pub enum $name {
            /// Default variant.
            #[default]
            #[serde(rename = $first_wire)]
            $first,
            $(
                #[doc = concat!("`", $wire, "`")]
                #[serde(rename = $wire)]
                $variant,
            )*
        }

        impl $name {
            /// Returns the wire spelling of this variant.
            #[must_use]
            pub fn as_str(&self) -> &'static str {
                match self {
                    Self::$first => $first_wire,
                    $(Self::$variant => $wire,)*
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = UnknownVariant;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $first_wire => Ok(Self::$first),
                    $($wire => Ok(Self::$variant),)*
                    _ => Err(UnknownVariant {
                        kind: stringify!($name),
                        value: s.to_owned(),
                    }),
                }
            }
        }
    };
}

wire_enum! {
    /// Site role of a user, or minimum site role of a group.
    SiteRole {
        Unlicensed => "Unlicensed",
        Creator => "Creator",
        Explorer => "Explorer",
        ExplorerCanPublish => "ExplorerCanPublish",
        Guest => "Guest",
        Interactor => "Interactor",
        Publisher => "Publisher",
        ReadOnly => "ReadOnly",
        ServerAdministrator => "ServerAdministrator",
        SiteAdministrator => "SiteAdministrator",
        SiteAdministratorCreator => "SiteAdministratorCreator",
        SiteAdministratorExplorer => "SiteAdministratorExplorer",
        SupportUser => "SupportUser",
        UnlicensedWithPublish => "UnlicensedWithPublish",
        Viewer => "Viewer",
        ViewerWithPublish => "ViewerWithPublish",
    }
}

wire_enum! {
    /// How a user authenticates.
    AuthSetting {
        ServerDefault => "ServerDefault",
        Saml => "SAML",
        OpenId => "OpenID",
        TableauIdWithMfa => "TableauIDWithMFA",
    }
}

wire_enum! {
    /// When licenses are granted to members of an imported group.
    LicenseMode {
        OnLogin => "onLogin",
        OnSync => "onSync",
    }
}

wire_enum! {
    /// How permissions are managed within a project.
    ContentPermissions {
        ManagedByOwner => "ManagedByOwner",
        LockedToProject => "LockedToProject",
        LockedToProjectWithoutNested => "LockedToProjectWithoutNested",
    }
}

wire_enum! {
    /// Ask Data availability for a data source.
    AskDataEnablement {
        SiteDefault => "SiteDefault",
        Enabled => "Enabled",
        Disabled => "Disabled",
    }
}

wire_enum! {
    /// Whether a capability is granted or denied.
    CapabilityMode {
        Allow => "Allow",
        Deny => "Deny",
    }
}

wire_enum! {
    /// Named capabilities that can appear in a permission rule.
    Capability {
        Read => "Read",
        AddComment => "AddComment",
        ChangeHierarchy => "ChangeHierarchy",
        ChangePermissions => "ChangePermissions",
        Connect => "Connect",
        CreateRefreshMetrics => "CreateRefreshMetrics",
        Delete => "Delete",
        Execute => "Execute",
        ExportData => "ExportData",
        ExportImage => "ExportImage",
        ExportXml => "ExportXml",
        Filter => "Filter",
        ProjectLeader => "ProjectLeader",
        RunExplainData => "RunExplainData",
        SaveAs => "SaveAs",
        ShareView => "ShareView",
        ViewComments => "ViewComments",
        ViewUnderlyingData => "ViewUnderlyingData",
        WebAuthoring => "WebAuthoring",
        Write => "Write",
    }
}

wire_enum! {
    /// Kind of principal a permission rule applies to. The wire spelling is the
    /// element tag used for the grantee.
    GranteeType {
        User => "user",
        Group => "group",
    }
}

wire_enum! {
    /// Content kinds that can be marked as a favorite. The wire spelling is the
    /// element tag used for the target.
    FavoriteType {
        Datasource => "datasource",
        Flow => "flow",
        Project => "project",
        View => "view",
        Workbook => "workbook",
    }
}

wire_enum! {
    /// Background task kinds attached to a schedule.
    TaskType {
        ExtractRefresh => "extractRefresh",
        RunFlow => "runFlow",
        DataAcceleration => "dataAcceleration",
    }
}

wire_enum! {
    /// What a schedule runs.
    ScheduleType {
        Extract => "Extract",
        Subscription => "Subscription",
        Flow => "Flow",
        DataAcceleration => "DataAcceleration",
    }
}

wire_enum! {
    /// Whether scheduled jobs run concurrently.
    ExecutionOrder {
        Parallel => "Parallel",
        Serial => "Serial",
    }
}

wire_enum! {
    /// Whether a schedule or site is running.
    ActiveState {
        Active => "Active",
        Suspended => "Suspended",
    }
}

wire_enum! {
    /// Site administrator scope.
    AdminMode {
        ContentAndUsers => "ContentAndUsers",
        ContentOnly => "ContentOnly",
    }
}

wire_enum! {
    /// How often a data-driven alert is checked.
    AlertFrequency {
        Once => "Once",
        Frequently => "Frequently",
        Hourly => "Hourly",
        Daily => "Daily",
        Weekly => "Weekly",
    }
}

wire_enum! {
    /// Data-quality warning kinds.
    WarningType {
        Warning => "WARNING",
        Deprecated => "DEPRECATED",
        Stale => "STALE",
        SensitiveData => "SENSITIVE_DATA",
        Maintenance => "MAINTENANCE",
    }
}

wire_enum! {
    /// Content kinds a subscription can target.
    SubscriptionContent {
        View => "View",
        Workbook => "Workbook",
    }
}

wire_enum! {
    /// Page orientation for subscription attachments.
    PageOrientation {
        Portrait => "PORTRAIT",
        Landscape => "LANDSCAPE",
    }
}

wire_enum! {
    /// Page size for subscription attachments.
    PageSizeOption {
        Unspecified => "UNSPECIFIED",
        A3 => "A3",
        A4 => "A4",
        A5 => "A5",
        B4 => "B4",
        B5 => "B5",
        Executive => "EXECUTIVE",
        Folio => "FOLIO",
        Ledger => "LEDGER",
        Legal => "LEGAL",
        Letter => "LETTER",
        Note => "NOTE",
        Quarto => "QUARTO",
        Tabloid => "TABLOID",
    }
}

wire_enum! {
    /// Days of the week used by weekly schedules.
    Weekday {
        Sunday => "Sunday",
        Monday => "Monday",
        Tuesday => "Tuesday",
        Wednesday => "Wednesday",
        Thursday => "Thursday",
        Friday => "Friday",
        Saturday => "Saturday",
    }
}
