use std::collections::HashMap;

use crate::catalog::Language;

/// Static UI strings for both languages; switching language swaps every string at once.
pub struct I18n {
    translations: HashMap<Language, HashMap<String, String>>,
    current_lang: Language,
}

impl I18n {
    pub fn new(lang: Language) -> Self {
        let mut translations = HashMap::new();

        // English
        let mut en = HashMap::new();
        // Page chrome
        en.insert("app_title".to_string(), "CS Commands Hub".to_string());
        en.insert("tagline".to_string(), "Popular console commands for practice and local server setup.".to_string());
        en.insert("language_name".to_string(), "English".to_string());
        en.insert("version_label".to_string(), "Version".to_string());
        en.insert("category_label".to_string(), "Category".to_string());
        en.insert("search_label".to_string(), "Search".to_string());
        en.insert("search_placeholder".to_string(), "Search commands, e.g. \"infinite\"".to_string());
        en.insert("how_to_use".to_string(), "How to use".to_string());
        en.insert("how_to_step_console".to_string(), "Open console in-game (~) and paste the command.".to_string());
        en.insert("how_to_step_cheats".to_string(), "Many commands require sv_cheats 1 for local practice.".to_string());
        en.insert("no_commands".to_string(), "No commands found".to_string());
        en.insert("card_tip".to_string(), "Tip: use mp_restartgame 1 after changing settings to apply them.".to_string());
        en.insert("footer_made_for".to_string(), "Made for practice: switch languages, filter by version, copy commands.".to_string());
        en.insert("footer_note".to_string(), "Note: some commands only work in local games or with sv_cheats enabled.".to_string());
        en.insert("results_count".to_string(), "{0} of {1} commands".to_string());

        // Copy actions
        en.insert("copy_button".to_string(), "Copy".to_string());
        en.insert("copy_desc_button".to_string(), "Copy with desc".to_string());
        en.insert("copied".to_string(), "Copied to clipboard".to_string());
        en.insert("copied_with_desc".to_string(), "Copied to clipboard with description".to_string());
        en.insert("copy_failed".to_string(), "Copy failed: {0}".to_string());
        en.insert("notice_title_ok".to_string(), "Done".to_string());
        en.insert("notice_title_error".to_string(), "Error".to_string());
        en.insert("notice_dismiss".to_string(), "Press any key to continue".to_string());

        // Interactive browser
        en.insert("key_hints".to_string(), "type=search  ↑/↓=move  ←/→=version  Tab=category  Ctrl+L=language  Enter=copy  Ctrl+E=copy with desc  Esc=quit".to_string());
        en.insert("warning_interactive_failed".to_string(), "Warning: Cannot enable interactive mode, falling back to simple mode".to_string());

        // CLI output
        en.insert("unknown_command_id".to_string(), "Unknown command id: {0}".to_string());
        en.insert("categories_title".to_string(), "Categories:".to_string());
        en.insert("versions_title".to_string(), "Game versions:".to_string());
        en.insert("listing_header".to_string(), "{0} • {1} • \"{2}\"".to_string());

        // Help texts
        en.insert("help_about".to_string(), "Counter-Strike console command reference (English/Russian)".to_string());
        en.insert("help_label_usage".to_string(), "Usage:".to_string());
        en.insert("help_label_commands".to_string(), "Commands:".to_string());
        en.insert("help_label_options".to_string(), "Options:".to_string());
        en.insert("help_browse".to_string(), "Browse commands interactively (default)".to_string());
        en.insert("help_list".to_string(), "Print the filtered command list".to_string());
        en.insert("help_copy".to_string(), "Copy a command to the clipboard by id".to_string());
        en.insert("help_categories".to_string(), "List category filters".to_string());
        en.insert("help_versions".to_string(), "List game versions".to_string());
        en.insert("help_opt_lang".to_string(), "Language: en | ru".to_string());
        en.insert("help_opt_version".to_string(), "Game version: CS2 | CS:GO | \"CS 1.6\"".to_string());
        en.insert("help_opt_category".to_string(), "Category filter (\"All\" for no filter)".to_string());
        en.insert("help_config_section".to_string(), "Config (~/.cch/config.toml, override with CCH_CONFIG):".to_string());
        en.insert("help_config_tui_mode".to_string(), "display.tui_mode: interactive | simple (interactive by default)".to_string());
        en.insert("help_config_language".to_string(), "display.language: en | ru | auto (ru by default)".to_string());

        // Russian
        let mut ru = HashMap::new();
        // Page chrome
        ru.insert("app_title".to_string(), "CS Commands Hub".to_string());
        ru.insert("tagline".to_string(), "Собраны популярные консольные команды для практики и настройки локальных серверов.".to_string());
        ru.insert("language_name".to_string(), "Русский".to_string());
        ru.insert("version_label".to_string(), "Версия".to_string());
        ru.insert("category_label".to_string(), "Категория".to_string());
        ru.insert("search_label".to_string(), "Поиск".to_string());
        ru.insert("search_placeholder".to_string(), "Поиск команд, пример: \"бесконечные\"".to_string());
        ru.insert("how_to_use".to_string(), "Как использовать".to_string());
        ru.insert("how_to_step_console".to_string(), "Откройте консоль в игре (~) и вставьте команду.".to_string());
        ru.insert("how_to_step_cheats".to_string(), "Многие команды требуют sv_cheats 1 для локальной практики.".to_string());
        ru.insert("no_commands".to_string(), "Команды не найдены".to_string());
        ru.insert("card_tip".to_string(), "Совет: используйте mp_restartgame 1 после изменения настроек, чтобы применить их.".to_string());
        ru.insert("footer_made_for".to_string(), "Для практики: переключайте язык, фильтруйте по версии, копируйте команды.".to_string());
        ru.insert("footer_note".to_string(), "Примечание: некоторые команды работают только в локальной игре или при включенных sv_cheats.".to_string());
        ru.insert("results_count".to_string(), "{0} из {1} команд".to_string());

        // Copy actions
        ru.insert("copy_button".to_string(), "Копировать".to_string());
        ru.insert("copy_desc_button".to_string(), "Коп. с описанием".to_string());
        ru.insert("copied".to_string(), "Скопировано в буфер обмена".to_string());
        ru.insert("copied_with_desc".to_string(), "Скопировано в буфер обмена с описанием".to_string());
        ru.insert("copy_failed".to_string(), "Не удалось скопировать: {0}".to_string());
        ru.insert("notice_title_ok".to_string(), "Готово".to_string());
        ru.insert("notice_title_error".to_string(), "Ошибка".to_string());
        ru.insert("notice_dismiss".to_string(), "Нажмите любую клавишу, чтобы продолжить".to_string());

        // Interactive browser
        ru.insert("key_hints".to_string(), "ввод=поиск  ↑/↓=выбор  ←/→=версия  Tab=категория  Ctrl+L=язык  Enter=копировать  Ctrl+E=с описанием  Esc=выход".to_string());
        ru.insert("warning_interactive_failed".to_string(), "Предупреждение: интерактивный режим недоступен, используется простой режим".to_string());

        // CLI output
        ru.insert("unknown_command_id".to_string(), "Неизвестный идентификатор команды: {0}".to_string());
        ru.insert("categories_title".to_string(), "Категории:".to_string());
        ru.insert("versions_title".to_string(), "Версии игры:".to_string());
        ru.insert("listing_header".to_string(), "{0} • {1} • \"{2}\"".to_string());

        // Help texts
        ru.insert("help_about".to_string(), "Справочник консольных команд Counter-Strike (английский/русский)".to_string());
        ru.insert("help_label_usage".to_string(), "Использование:".to_string());
        ru.insert("help_label_commands".to_string(), "Команды:".to_string());
        ru.insert("help_label_options".to_string(), "Параметры:".to_string());
        ru.insert("help_browse".to_string(), "Интерактивный просмотр команд (по умолчанию)".to_string());
        ru.insert("help_list".to_string(), "Вывести отфильтрованный список команд".to_string());
        ru.insert("help_copy".to_string(), "Скопировать команду в буфер обмена по идентификатору".to_string());
        ru.insert("help_categories".to_string(), "Список категорий".to_string());
        ru.insert("help_versions".to_string(), "Список версий игры".to_string());
        ru.insert("help_opt_lang".to_string(), "Язык: en | ru".to_string());
        ru.insert("help_opt_version".to_string(), "Версия игры: CS2 | CS:GO | \"CS 1.6\"".to_string());
        ru.insert("help_opt_category".to_string(), "Фильтр категории (\"All\" — без фильтра)".to_string());
        ru.insert("help_config_section".to_string(), "Конфигурация (~/.cch/config.toml, путь можно задать через CCH_CONFIG):".to_string());
        ru.insert("help_config_tui_mode".to_string(), "display.tui_mode: interactive | simple (по умолчанию interactive)".to_string());
        ru.insert("help_config_language".to_string(), "display.language: en | ru | auto (по умолчанию ru)".to_string());

        translations.insert(Language::En, en);
        translations.insert(Language::Ru, ru);

        Self {
            translations,
            current_lang: lang,
        }
    }

    pub fn set_language(&mut self, lang: Language) {
        self.current_lang = lang;
    }

    pub fn t(&self, key: &str) -> String {
        if let Some(lang_map) = self.translations.get(&self.current_lang) {
            if let Some(value) = lang_map.get(key) {
                return value.clone();
            }
        }
        key.to_string()
    }

    pub fn t_format(&self, key: &str, args: &[&str]) -> String {
        let template = self.t(key);
        let mut result = template;
        for (i, arg) in args.iter().enumerate() {
            result = result.replace(&format!("{{{}}}", i), arg);
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn both_languages_define_the_same_keys() {
        let i18n = I18n::new(Language::En);
        let en: HashSet<&String> = i18n.translations[&Language::En].keys().collect();
        let ru: HashSet<&String> = i18n.translations[&Language::Ru].keys().collect();
        assert_eq!(en, ru);
    }

    #[test]
    fn switching_language_changes_strings() {
        let mut i18n = I18n::new(Language::En);
        assert_eq!(i18n.t("no_commands"), "No commands found");
        i18n.set_language(Language::Ru);
        assert_eq!(i18n.t("no_commands"), "Команды не найдены");
        assert_eq!(i18n.current_lang, Language::Ru);
    }

    #[test]
    fn formats_positional_arguments() {
        let i18n = I18n::new(Language::En);
        assert_eq!(i18n.t_format("results_count", &["2", "8"]), "2 of 8 commands");
        assert_eq!(i18n.t("missing_key"), "missing_key");
    }
}
