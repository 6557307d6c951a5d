pub mod ControllerSwitchUI;
pub mod PanelGameSetting;
pub mod PanelSelect;
pub mod PlayerController;
pub mod PlayerDataManager;
pub mod VolListItem;
pub mod dhj;

use crate::core::Interceptor;
use crate::runtime::Runtime;

pub fn init(rt: &Runtime, interceptor: &Interceptor) {
    ControllerSwitchUI::init(rt, interceptor);
    PanelGameSetting::init(rt, interceptor);
    VolListItem::init(rt, interceptor);
    PanelSelect::init(rt, interceptor);
    PlayerDataManager::init(rt, interceptor);
    PlayerController::init(rt, interceptor);
    dhj::init(rt, interceptor);
}
