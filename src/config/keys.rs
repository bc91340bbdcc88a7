//! Canonical configuration key names, one enum per flag family.
//!
//! Always use these instead of string literals when setting flags.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, KeyKind, Result};

macro_rules! flag_keys {
    (
        $(#[$meta:meta])*
        $name:ident, $kind:expr, {
            $($variant:ident => $text:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $text),+
                }
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                self.as_str()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = Error;

            fn from_str(s: &str) -> Result<Self> {
                $name::ALL
                    .iter()
                    .copied()
                    .find(|key| key.as_str() == s)
                    .ok_or_else(|| Error::invalid_key($kind, s))
            }
        }
    };
}

flag_keys! {
    /// Boolean switches.
    BooleanKey, KeyKind::Boolean, {
        ProviderDelivery => "provider-delivery",
        SuppressErrorLog => "suppress-error-log",
    }
}

flag_keys! {
    /// Duration settings.
    DurationKey, KeyKind::Duration, {
        Timeout => "timeout",
    }
}

flag_keys! {
    /// String-list settings, passed through to the execution collaborator.
    StringKey, KeyKind::String, {
        KubeApiServer => "kube-apiserver",
        KubeAsUser => "kube-as-user",
        KubeCaFile => "kube-ca-file",
        KubeContext => "kube-context",
        KubeToken => "kube-token",
        KubeConfig => "kubeconfig",
        Namespace => "namespace",
        OpenshiftVersion => "openshift-version",
        RegistryConfig => "registry-config",
        RepositoryConfig => "repository-config",
        RepositoryCache => "repository-cache",
        Config => "config",
        ChartValues => "chart-values",
        KubeAsGroups => "kube-as-group",
    }
}

flag_keys! {
    /// Value-map groups. `CommandSet` carries verifier configuration such as
    /// the profile; the others are chart value overrides.
    ValuesKey, KeyKind::Values, {
        ChartSet => "chart-set",
        ChartSetFile => "chart-set-file",
        ChartSetString => "chart-set-string",
        CommandSet => "set",
    }
}
