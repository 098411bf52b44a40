use crate::formula::Variable;
use crate::Error;
use std::collections::HashMap;

/// Stable name <-> variable mapping for one solving session.
///
/// Ids start at 1 and are handed out densely; an id is never reused for another name.
#[derive(Debug, Default)]
pub struct Interner {
    ids: HashMap<String, Variable>,
    names: Vec<String>,
}

impl Interner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn intern(&mut self, name: &str) -> Variable {
        if let Some(&id) = self.ids.get(name) {
            return id;
        }
        self.names.push(name.to_string());
        let id = Variable(self.names.len());
        self.ids.insert(name.to_string(), id);
        id
    }

    pub fn get(&self, name: &str) -> Option<Variable> {
        self.ids.get(name).copied()
    }

    pub fn resolve(&self, id: Variable) -> Result<&str, Error> {
        id.0.checked_sub(1)
            .and_then(|i| self.names.get(i))
            .map(String::as_str)
            .ok_or(Error::UnknownVariable(id.0))
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
