use handlebars::{
    Context, Handlebars, Helper, HelperDef, HelperResult, Output, RenderContext, RenderError,
};
use serde::de::DeserializeOwned;

use crate::modules::helpers::time::TimeHelper;

/// # heat result formatting helper
/// shows `DNS`, `DNF` or `DSQ` for a heat that was not finished and the formatted time otherwise
///
/// ### usage
/// ```handlebars
/// {{formatHeatResult heat1.status heat1.time}}
/// ```
#[derive(Clone, Copy)]
pub struct FormatHeatResultHelper;

impl HelperDef for FormatHeatResultHelper {
    fn call<'reg: 'rc, 'rc>(
        &self,
        helper: &Helper,
        _: &Handlebars,
        _: &Context,
        _: &mut RenderContext,
        out: &mut dyn Output,
    ) -> HelperResult {
        check_param_count(helper, 2)?;
        let status: Option<i32> = param_value(helper, 0)?;
        let time: Option<i64> = param_value(helper, 1)?;

        out.write(&TimeHelper::format_time_or_status(status, time))?;

        Ok(())
    }
}

pub fn check_param_count(h: &Helper, n: u64) -> Result<(), RenderError> {
    if h.params().len() != n as usize {
        return Err(RenderError::new(format!(
            "Wrong number of arguments for helper \"{}\", {n} was expected but {} were given",
            h.name(),
            h.params().len()
        )));
    }

    Ok(())
}

/// read a helper parameter into `T`, a missing parameter is read as `null`
pub fn param_value<T: DeserializeOwned>(h: &Helper, index: usize) -> Result<T, RenderError> {
    let value = h
        .param(index)
        .map(|param| param.value().clone())
        .unwrap_or(serde_json::Value::Null);

    serde_json::from_value(value).map_err(|err| {
        RenderError::new(format!(
            "Invalid argument {index} for helper \"{}\": {err}",
            h.name()
        ))
    })
}
