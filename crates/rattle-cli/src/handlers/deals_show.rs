use crate::handlers::HandlerContext;
use crate::presentation::presenters;
use anyhow::{Result, anyhow};
use rattle_runtime::Session;

pub fn handle(session: &Session, id: &str, ctx: &HandlerContext) -> Result<()> {
    let deal = session
        .deal(id)
        .ok_or_else(|| anyhow!("Deal '{}' not found", id))?;

    ctx.render(presenters::present_deal_detail(deal))
}
