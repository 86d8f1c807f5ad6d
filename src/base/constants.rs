//! Domain constants: fully qualified names of the core language modules.

/// Root of the class hierarchy.
pub const OBJECT_MODULE: &str = "wollok.lang.Object";

/// Module whose instances are interned by rounded numeric value.
pub const NUMBER_MODULE: &str = "wollok.lang.Number";

/// Module whose instances are interned by string value.
pub const STRING_MODULE: &str = "wollok.lang.String";

/// Boolean module. Instances are not interned by the core.
pub const BOOLEAN_MODULE: &str = "wollok.lang.Boolean";

/// Base exception module.
pub const EXCEPTION_MODULE: &str = "wollok.lang.Exception";

/// Field consulted when composing unhandled-exception details.
pub const MESSAGE_FIELD: &str = "message";
