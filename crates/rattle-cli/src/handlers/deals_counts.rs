use crate::handlers::HandlerContext;
use crate::presentation::presenters;
use anyhow::Result;
use rattle_runtime::Session;

pub fn handle(session: &Session, ctx: &HandlerContext) -> Result<()> {
    let counts = session.counts();
    ctx.render(presenters::present_category_counts(
        &counts,
        session.list_config().at_risk_threshold,
    ))
}
