use crate::handlers::HandlerContext;
use crate::presentation::presenters;
use anyhow::Result;
use rattle_engine::owner_counts;
use rattle_runtime::Session;

pub fn handle(session: &Session, ctx: &HandlerContext) -> Result<()> {
    ctx.render(presenters::present_owners(owner_counts(session.deals())))
}
