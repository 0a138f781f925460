//! Closed enumerations accepted by the manifest schema.
//!
//! Values are matched case-sensitively against their canonical spelling.

/// Operating system a pod targets (`spec.os`).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OsName {
    Linux,
    Windows,
}

impl OsName {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "linux" => Some(OsName::Linux),
            "windows" => Some(OsName::Windows),
            _ => None,
        }
    }
}

/// Transport protocol of a container port.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Protocol {
    Tcp,
    Udp,
}

impl Protocol {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "TCP" => Some(Protocol::Tcp),
            "UDP" => Some(Protocol::Udp),
            _ => None,
        }
    }
}
