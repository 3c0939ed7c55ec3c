use std::fmt::Display;

/// Index of a slot in the symbol table. Types are compared by slot identity,
/// so two symbols have the same type exactly when their `ty` indices match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SymIndex(pub usize);

/// Slot of the predefined `void` name-type.
pub const VOID_TYPE: SymIndex = SymIndex(0);
/// Slot of the predefined `integer` name-type.
pub const INTEGER_TYPE: SymIndex = SymIndex(1);
/// Slot of the predefined `real` name-type.
pub const REAL_TYPE: SymIndex = SymIndex(2);

/// Upper bound on generated temporary variables per table.
pub const MAX_TEMP_VARS: usize = 65536;

/// Value carried by a constant symbol. Which variant is stored must agree
/// with the symbol's declared type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConstValue {
    Int(i64),
    Real(f64),
}

#[derive(Debug, Clone, PartialEq)]
pub enum SymbolKind {
    Variable,
    Constant(ConstValue),
    /// Declared functions; `params` holds the formal parameter types in
    /// declaration order. The return type lives in `Symbol::ty`.
    Function { params: Vec<SymIndex> },
    Procedure { params: Vec<SymIndex> },
    /// A type alias. Name-types type-check to their own slot index.
    NameType,
}

/// Field-free view of `SymbolKind`, for code that only dispatches on the
/// kind of entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolTag {
    Variable,
    Constant,
    Function,
    Procedure,
    NameType,
}

impl Display for SymbolTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            SymbolTag::Variable => "variable",
            SymbolTag::Constant => "constant",
            SymbolTag::Function => "function",
            SymbolTag::Procedure => "procedure",
            SymbolTag::NameType => "name type",
        };
        write!(f, "{}", name)
    }
}

#[derive(Debug, Clone)]
pub struct Symbol {
    pub name: String,
    /// Declared type: the value type for variables and constants, the return
    /// type for functions, `VOID_TYPE` for procedures, the symbol's own slot
    /// for name-types.
    pub ty: SymIndex,
    pub kind: SymbolKind,
}

impl Symbol {
    pub fn tag(&self) -> SymbolTag {
        match self.kind {
            SymbolKind::Variable => SymbolTag::Variable,
            SymbolKind::Constant(_) => SymbolTag::Constant,
            SymbolKind::Function { .. } => SymbolTag::Function,
            SymbolKind::Procedure { .. } => SymbolTag::Procedure,
            SymbolKind::NameType => SymbolTag::NameType,
        }
    }
}

/// Slot-indexed symbol storage plus the scope stack of the blocks currently
/// being compiled.
///
/// The table is populated before the semantic passes run; during type
/// checking and folding it is only read. The caller opens the scope of a
/// block (pushing the owning function or procedure symbol) before checking
/// that block's body and closes it afterwards, innermost blocks first.
#[derive(Debug, Clone)]
pub struct SymbolTable {
    symbols: Vec<Symbol>,
    environments: Vec<SymIndex>,
    temp_count: usize,
}

impl SymbolTable {
    /// Creates a table holding the three predefined name-types, in the slots
    /// named by `VOID_TYPE`, `INTEGER_TYPE` and `REAL_TYPE`.
    pub fn new() -> Self {
        let mut table = SymbolTable {
            symbols: Vec::new(),
            environments: Vec::new(),
            temp_count: 0,
        };
        table.enter_nametype("void");
        table.enter_nametype("integer");
        table.enter_nametype("real");
        table
    }

    fn enter(&mut self, symbol: Symbol) -> SymIndex {
        let index = SymIndex(self.symbols.len());
        self.symbols.push(symbol);
        index
    }

    /// Enters a type alias. Its `ty` is its own slot.
    pub fn enter_nametype(&mut self, name: &str) -> SymIndex {
        let index = SymIndex(self.symbols.len());
        self.enter(Symbol {
            name: String::from(name),
            ty: index,
            kind: SymbolKind::NameType,
        })
    }

    pub fn enter_variable(&mut self, name: &str, ty: SymIndex) -> SymIndex {
        self.enter(Symbol {
            name: String::from(name),
            ty,
            kind: SymbolKind::Variable,
        })
    }

    /// Enters a named constant. `ty` must be `INTEGER_TYPE` for `Int` values
    /// and `REAL_TYPE` for `Real` values.
    pub fn enter_constant(&mut self, name: &str, ty: SymIndex, value: ConstValue) -> SymIndex {
        self.enter(Symbol {
            name: String::from(name),
            ty,
            kind: SymbolKind::Constant(value),
        })
    }

    pub fn enter_function(
        &mut self,
        name: &str,
        return_ty: SymIndex,
        params: Vec<SymIndex>,
    ) -> SymIndex {
        self.enter(Symbol {
            name: String::from(name),
            ty: return_ty,
            kind: SymbolKind::Function { params },
        })
    }

    pub fn enter_procedure(&mut self, name: &str, params: Vec<SymIndex>) -> SymIndex {
        self.enter(Symbol {
            name: String::from(name),
            ty: VOID_TYPE,
            kind: SymbolKind::Procedure { params },
        })
    }

    /// Looks up a slot. Panics on an index that was never handed out, which
    /// means the tree and the table went out of sync.
    pub fn get_symbol(&self, index: SymIndex) -> &Symbol {
        match self.symbols.get(index.0) {
            Some(symbol) => symbol,
            None => panic!("symbol table has no slot {}", index.0),
        }
    }

    pub fn get_symbol_tag(&self, index: SymIndex) -> SymbolTag {
        self.get_symbol(index).tag()
    }

    /// Value of a constant symbol. Panics if the slot is not a constant.
    pub fn get_constant_value(&self, index: SymIndex) -> ConstValue {
        match self.get_symbol(index).kind {
            SymbolKind::Constant(value) => value,
            _ => panic!(
                "symbol '{}' is not a constant",
                self.get_symbol(index).name
            ),
        }
    }

    /// Pushes the function or procedure owning the block about to be checked.
    pub fn open_scope(&mut self, environment: SymIndex) {
        self.environments.push(environment);
    }

    pub fn close_scope(&mut self) {
        if self.environments.pop().is_none() {
            panic!("trying to close a scope when none is open");
        }
    }

    /// The function or procedure whose block is currently being checked.
    pub fn current_environment(&self) -> SymIndex {
        match self.environments.last() {
            Some(environment) => *environment,
            None => panic!("no open scope"),
        }
    }

    /// Creates a fresh `$n` temporary variable of the given type for later
    /// phases. The count is capped; running out means a runaway caller.
    pub fn gen_temp_var(&mut self, ty: SymIndex) -> SymIndex {
        if self.temp_count >= MAX_TEMP_VARS {
            panic!("out of temporary variables");
        }
        self.temp_count += 1;
        let name = format!("${}", self.temp_count);
        self.enter_variable(&name, ty)
    }
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::new()
    }
}
