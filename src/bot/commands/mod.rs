pub mod alerts;
pub mod city;
pub mod times;

use teloxide::utils::command::BotCommands;

#[derive(BotCommands, Clone)]
#[command(rename_rule = "lowercase", description = "أوامر بوت مواقيت الصلاة:")]
pub enum Command {
    #[command(description = "بدء استخدام البوت")]
    Start,
    #[command(description = "عرض هذه المساعدة")]
    Help,
    #[command(description = "عرض مواقيت الصلاة لمدينتك المحفوظة")]
    Times,
    #[command(description = "تغيير الدولة والمدينة")]
    City,
    #[command(description = "تفعيل تنبيهات الأذان لليوم")]
    AlertsOn,
    #[command(description = "إيقاف تنبيهات الأذان")]
    AlertsOff,
}
