/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: The expression and item enums that tie the node kinds together
/// - expressions: Definitions for the expression node types
/// - declarations: Prototypes and function definitions
pub mod ast;
pub mod declarations;
pub mod expressions;

#[cfg(test)]
mod tests;
