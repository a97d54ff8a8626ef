use super::Val;
use std::collections::HashMap;
use std::rc::Rc;

/// ## Variable memory
///
/// Names are case-insensitive. Reading a variable that was never
/// assigned is not an error: string variables read as `""` and
/// numeric variables read as `0`.

#[derive(Debug, Default)]
pub struct Environment {
    vars: HashMap<Rc<str>, Val>,
}

impl Environment {
    pub fn new() -> Environment {
        Environment::default()
    }

    pub fn clear(&mut self) {
        self.vars.clear();
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    pub fn get(&self, var_name: &str) -> Val {
        let key = var_name.to_ascii_uppercase();
        match self.vars.get(key.as_str()) {
            Some(val) => val.clone(),
            None => {
                if key.ends_with('$') {
                    Val::String("".into())
                } else {
                    Val::Number(0.0)
                }
            }
        }
    }

    pub fn set(&mut self, var_name: &str, value: Val) {
        let key = var_name.to_ascii_uppercase();
        match self.vars.get_mut(key.as_str()) {
            Some(var) => *var = value,
            None => {
                self.vars.insert(key.into(), value);
            }
        };
    }
}
