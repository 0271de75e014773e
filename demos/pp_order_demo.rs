//! # 腳踏車生產工單推導範例
//!
//! - 產品：腳踏車
//! - 零件：車架、輪子、座椅
//! - 需求：銷售訂單行
//! - 日曆：週一至週五，含一天國定假日

use std::sync::Arc;

use chrono::NaiveDate;
use mrp_calc::{InMemoryMasterData, PPOrderSupplier, PlanningServices, UomConversionRate};
use mrp_core::*;
use rust_decimal::Decimal;

const PCE: i32 = 100;
const DOZEN: i32 = 101;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("🚲 ===== 腳踏車生產工單推導範例 =====");
    println!();

    // ========== 1. 主資料 ==========
    println!("🔧 步驟 1: 建立主資料");
    let master_data = Arc::new(create_bike_master_data()?);
    println!();

    // ========== 2. 工作日曆 ==========
    println!("📅 步驟 2: 建立工廠工作日曆");
    let calendar = WorkCalendar::from_shift_data(
        "PLANT-01",
        &[true, true, true, true, true, false, false],
        vec![NaiveDate::from_ymd_opt(2024, 6, 6).ok_or_else(|| anyhow::anyhow!("無效日期"))?],
    );
    println!("   工作模式: {:?}", calendar.working_days);
    println!("   假日: {:?}", calendar.holidays);
    println!();

    // ========== 3. 需求 ==========
    println!("📋 步驟 3: 銷售訂單需求");
    let bike = master_data.get_product(ProductId::of_repo_id(10)?)?;
    let planning = bike_planning()?;
    let context = PlanningContext::new(bike, OrgId::of_repo_id(1)?, planning)
        .with_plant_id(ResourceId::of_repo_id(3)?);
    let demand_date = NaiveDate::from_ymd_opt(2024, 6, 10).ok_or_else(|| anyhow::anyhow!("無效日期"))?;
    let request = MaterialRequest::new(
        context,
        demand_date,
        Quantity::new(Decimal::from(5), UomId::of_repo_id(DOZEN)?),
    )
    .with_demand_order_line_id(OrderLineId::of_repo_id(1001)?)
    .with_demand_bpartner_id(BPartnerId::of_repo_id(2001)?);
    println!("   需求: {} 於 {}", request.qty_to_supply, request.demand_date);
    println!();

    // ========== 4. 推導工單 ==========
    println!("⚙️  步驟 4: 推導生產工單");
    let supplier =
        PPOrderSupplier::new(PlanningServices::from_master_data(master_data)).with_calendar(calendar);
    let order = supplier.derive_order_with_lines(&request)?;
    println!();

    // ========== 5. 結果 ==========
    println!("📊 工單");
    println!("   產品: {}", order.product_descriptor.product_id);
    println!("   數量: {}", order.qty_required);
    println!("   開工: {}", order.date_start_schedule);
    println!("   完工: {}", order.date_promised);
    println!("   工期: {} 天", order.duration_days());
    println!();

    println!("📦 用料明細");
    for line in &order.lines {
        println!(
            "   {} {:<8} 產品 {:<4} 數量 {:<10} 日期 {}",
            if line.receipt { "⬅" } else { "➡" },
            line.description.as_deref().unwrap_or("-"),
            line.product_descriptor.product_id,
            line.qty_required,
            line.issue_or_receive_date
        );
    }

    Ok(())
}

fn bike_planning() -> anyhow::Result<ProductPlanning> {
    Ok(ProductPlanning::new(ProductPlanningId::of_repo_id(1)?, ProductId::of_repo_id(10)?)
        .with_plant_id(ResourceId::of_repo_id(3)?)
        .with_bom_id(ProductBomId::of_repo_id(5)?)
        .with_workflow_id(PPRoutingId::of_repo_id(7)?)
        .with_transfer_time(Decimal::ONE))
}

fn create_bike_master_data() -> anyhow::Result<InMemoryMasterData> {
    let pce = UomId::of_repo_id(PCE)?;
    let bom_id = ProductBomId::of_repo_id(5)?;
    let mut data = InMemoryMasterData::new();

    for (id, value, name) in [
        (10, "BIKE-001", "Bike"),
        (20, "FRAME-001", "Frame"),
        (30, "WHEEL-001", "Wheel"),
        (40, "SEAT-001", "Seat"),
    ] {
        data.add_product(Product::new(ProductId::of_repo_id(id)?, value, name, pce));
    }

    data.add_product_planning(bike_planning()?);
    data.add_bom(ProductBom::new(bom_id, ProductId::of_repo_id(10)?, "BIKE-BOM", pce));

    let line = |id: i32, line_no: u32, product: i32, qty: i64| -> anyhow::Result<ProductBomLine> {
        Ok(ProductBomLine::new(
            ProductBomLineId::of_repo_id(id)?,
            bom_id,
            line_no,
            ProductId::of_repo_id(product)?,
            pce,
            Decimal::from(qty),
        ))
    };
    data.add_bom_line(line(51, 10, 20, 1)?.with_description("Frame"));
    data.add_bom_line(line(52, 20, 30, 2)?.with_description("Wheel").with_scrap(Decimal::from(5)));
    data.add_bom_line(line(53, 30, 40, 1)?.with_description("Seat"));

    data.add_routing(
        Routing::new(PPRoutingId::of_repo_id(7)?, "BIKE-ASSEMBLY", DurationUnit::Minute)
            .with_activity(RoutingActivity::new("WELD", Decimal::from(45)).with_setup_time(Decimal::from(60)))
            .with_activity(RoutingActivity::new("ASSEMBLE", Decimal::from(30))),
    );
    data.add_plant(Plant::new(ResourceId::of_repo_id(3)?, "PLANT-01", Decimal::from(8)));
    data.add_uom_conversion(UomConversionRate::generic(
        UomId::of_repo_id(DOZEN)?,
        pce,
        Decimal::from(12),
    ));

    println!("   ✓ 產品 4 筆、BOM 明細 3 筆、製程 2 道工序");
    Ok(data)
}
