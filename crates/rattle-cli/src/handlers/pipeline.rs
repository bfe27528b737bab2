use crate::handlers::HandlerContext;
use crate::presentation::presenters;
use anyhow::Result;
use rattle_engine::stage_distribution;
use rattle_runtime::Session;

pub fn handle(session: &Session, ctx: &HandlerContext) -> Result<()> {
    let stages = stage_distribution(session.deals());
    ctx.render(presenters::present_pipeline(&stages))
}
