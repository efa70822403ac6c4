use std::fmt::{self, Debug, Formatter};

/// A fixed behavioral contract for one relay role.
///
/// A persona pairs a display name with the system instructions that pin
/// down how the model should behave for a single relay call. Personas
/// are created at process start and never change afterwards.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Persona {
    name: String,
    instructions: String,
}

impl Persona {
    /// Creates a new persona.
    #[inline]
    pub fn new<N: Into<String>, I: Into<String>>(
        name: N,
        instructions: I,
    ) -> Self {
        Self {
            name: name.into(),
            instructions: instructions.into(),
        }
    }

    /// Returns the display name of this persona.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the system instructions bound to this persona.
    #[inline]
    pub fn instructions(&self) -> &str {
        &self.instructions
    }
}

impl Debug for Persona {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        // The instruction texts are long, the name identifies a persona
        // well enough.
        f.debug_struct("Persona")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_omits_instructions() {
        let persona =
            Persona::new("Capital Agent", "Tell the capital city.");
        let debug = format!("{persona:?}");
        assert!(debug.contains("Capital Agent"));
        assert!(!debug.contains("Tell the capital city."));
    }
}
