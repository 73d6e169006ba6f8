/*!
Miscelanous items related to [logging](log).

Note, no log implementation is provided.
For more details, see [log].
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to [parsing](crate::parse)
    pub const PARSE: &str = "parse";

    /// Logs related to [normalization](crate::procedures::normalize)
    pub const NORMALIZE: &str = "normalize";

    /// Logs related to [resolution](crate::procedures::resolution)
    pub const RESOLUTION: &str = "resolution";

    /// Logs related to [entailment](crate::procedures::entailment)
    pub const ENTAILMENT: &str = "entailment";

    /// Logs related to [revision](crate::procedures::revision)
    pub const REVISION: &str = "revision";

    /// Logs related to the search for a minimal contraction
    pub const CONTRACTION: &str = "contraction";

    /// Logs related to loading and saving a base
    pub const STORE: &str = "store";
}
