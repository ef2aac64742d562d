// ==========================================
// 钻井排程服务 - 钻机产能领域模型
// ==========================================
// 红线: 任一时间窗开钻井数不得超过 rig_limit
// 用途: 求解结果校验、时间窗负载统计
// ==========================================

use serde::{Deserialize, Serialize};

// ==========================================
// RigSlot - 单个时间窗的钻机槽位
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RigSlot {
    pub timeframe: u32, // 时间窗 (1-based)
    pub capacity: u32,  // 可用钻机数 (= rig_limit)
    pub assigned: u32,  // 已开钻井数
}

impl RigSlot {
    pub fn new(timeframe: u32, capacity: u32) -> Self {
        Self {
            timeframe,
            capacity,
            assigned: 0,
        }
    }

    /// 为所有时间窗创建统一产能的槽位 (1..=timeframes)
    pub fn uniform(timeframes: u32, capacity: u32) -> Vec<RigSlot> {
        (1..=timeframes).map(|t| RigSlot::new(t, capacity)).collect()
    }
}

// ==========================================
// Trait: CapacityConstraint
// ==========================================
// 用途: 钻机产能约束检查接口
pub trait CapacityConstraint {
    /// 检查是否超限
    fn is_overloaded(&self) -> bool;

    /// 剩余钻机数
    fn remaining(&self) -> u32;

    /// 钻机利用率（0.0 - 1.0+），capacity 为 0 时返回 0.0
    fn utilization(&self) -> f64;
}

impl CapacityConstraint for RigSlot {
    fn is_overloaded(&self) -> bool {
        self.assigned > self.capacity
    }

    fn remaining(&self) -> u32 {
        self.capacity.saturating_sub(self.assigned)
    }

    fn utilization(&self) -> f64 {
        if self.capacity == 0 {
            return 0.0;
        }
        self.assigned as f64 / self.capacity as f64
    }
}
