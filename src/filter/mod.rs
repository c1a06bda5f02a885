//! SCIM filter compilation into directory filter syntax.
//!
//! A parsed filter tree is walked top-down; every attribute reference is
//! resolved through the [`SchemaRegistry`](crate::schema::SchemaRegistry)
//! and every comparison is mapped onto the directory's native syntax.
//! References to sub-attributes of complex attributes become substring
//! matches on the serialized fragment stored in the carrier attribute.
//!
//! | SCIM filter (Group)               | Directory filter                        |
//! |-----------------------------------|-----------------------------------------|
//! | `displayName eq "Admins"`         | `cn=Admins`                             |
//! | `members.value eq "x"`            | `member=*"value":"x"*`                  |
//! | `members.value co "inum=123"`     | `member=*"value":*inum=123*`            |
//! | `members.value pr`                | `&(member=*)(member=*"value":"*)`       |
//! | `members[display sw "J"]`         | `member=*"display":*J*`                 |

pub mod compiler;
pub mod config;
pub mod fragment;
pub mod node;
pub mod operator;

pub use compiler::{FilterCompiler, FilterCompilerBuilder};
pub use config::{CompilerConfig, LiteralEscaping};
pub use node::FilterNode;
pub use operator::Operator;
