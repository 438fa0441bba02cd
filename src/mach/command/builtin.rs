use super::Result;
use crate::error;
use crate::mach::{ArgumentList, Env};

/// `A = expression`
pub fn assign(args: &mut ArgumentList, _env: &mut Env) -> Result<()> {
    let name = args.get_numeric_variable()?;
    args.get_specific_symbol('=')?;
    let value = args.evaluate_numeric_expression()?;
    if args.has_any() {
        return Err(error!(SyntaxError; "Invalid arguments in numeric assignment"));
    }
    args.var().set_numeric(name, value)
}

/// `$1 = string + string ...`
pub fn build_string(args: &mut ArgumentList, _env: &mut Env) -> Result<()> {
    let name = args.get_string_variable()?;
    args.get_specific_symbol('=')?;
    let value = args.evaluate_string_expression()?;
    if args.has_any() {
        return Err(error!(SyntaxError; "Invalid arguments in string building"));
    }
    args.var().set_string(&name, &value)
}
